use crate::pricing::BillingCycle;
use crate::savings::remote::RemoteSource;
use crate::savings::{FileSource, SampleSource, SavingsDataset, SavingsSource, SourceError};
use crate::utils::block_on;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    #[serde(default)]
    pub default_billing: BillingCycle,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Sample,
    File,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_currency() -> String {
    super::DEFAULT_CURRENCY.to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Sample,
            path: None,
            url: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl SourceConfig {
    /// Source reading from a file, used by `--data` and `LASTMILE_DATA`
    pub fn file(path: PathBuf) -> Self {
        Self {
            kind: SourceKind::File,
            path: Some(path),
            ..Self::default()
        }
    }

    /// Load the dataset from the configured source.
    ///
    /// File errors propagate; a failing remote endpoint degrades to the sample series.
    pub fn load_dataset(&self) -> Result<SavingsDataset, SourceError> {
        match self.kind {
            SourceKind::Sample => SampleSource.fetch(),
            SourceKind::File => {
                let path = self.path.clone().ok_or_else(|| {
                    SourceError::Parse("source.kind = \"file\" requires source.path".to_string())
                })?;
                let source = FileSource::new(path);
                crate::debug_println!(
                    "Reading {} source at {}",
                    source.name(),
                    source.path().display()
                );
                source.fetch()
            }
            SourceKind::Remote => {
                let url = self.url.clone().ok_or_else(|| {
                    SourceError::Parse("source.kind = \"remote\" requires source.url".to_string())
                })?;
                let remote = RemoteSource::new(url, Duration::from_secs(self.timeout_secs));
                crate::debug_println!("Fetching savings from {}", remote.url());
                Ok(block_on(remote.fetch_with_fallback()))
            }
        }
    }
}
