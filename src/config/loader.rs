use super::types::{Config, SourceConfig, SourceKind};
use crate::debug_println;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user config, or defaults if it is missing or unreadable
    pub fn load() -> Config {
        Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config, using defaults: {}", e);
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        })
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = Self::load_from(&Self::get_config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(config_path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
        if !config_path.exists() {
            debug_println!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// `LASTMILE_DATA` points the dashboard at a JSON file, `LASTMILE_NO_COLOR` disables colour
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LASTMILE_DATA") {
            if !path.trim().is_empty() {
                self.source = SourceConfig::file(PathBuf::from(path));
            }
        }
        if std::env::var("LASTMILE_NO_COLOR").is_ok() {
            self.color = false;
        }
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.lastmile/config.toml)
    pub fn get_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".lastmile").join("config.toml")
        } else {
            PathBuf::from(".lastmile/config.toml")
        }
    }

    /// Initialize config directory and create default config
    pub fn init() -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();
        if Self::init_at(&config_path)? {
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }
        Ok(())
    }

    /// Write a default config unless one exists. Returns whether a file was created.
    pub fn init_at(config_path: &Path) -> Result<bool, Box<dyn std::error::Error>> {
        if config_path.exists() {
            return Ok(false);
        }
        Config::default().save_to(config_path)?;
        Ok(true)
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.currency_symbol.trim().is_empty() {
            return Err("currency_symbol must not be empty".into());
        }

        match self.source.kind {
            SourceKind::Sample => {}
            SourceKind::File => match &self.source.path {
                Some(path) if !path.as_os_str().is_empty() => {}
                _ => return Err("source.kind = \"file\" requires source.path".into()),
            },
            SourceKind::Remote => {
                let url = self
                    .source
                    .url
                    .as_deref()
                    .ok_or("source.kind = \"remote\" requires source.url")?;
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(format!("source.url must be an http(s) URL: {}", url).into());
                }
                if self.source.timeout_secs == 0 {
                    return Err("source.timeout_secs must be greater than 0".into());
                }
            }
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}
