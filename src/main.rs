use lastmile::cli::Cli;
use lastmile::config::{Config, ConfigLoader, SourceConfig};
use lastmile::core::{
    dashboard_sections, faq_sections, pricing_sections, DashboardReport, ReportContext,
    ReportGenerator, Section,
};
use lastmile::debug_println;
use lastmile::pricing::find_plan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    if cli.print {
        let config = ConfigLoader::load();
        config.print()?;
        return Ok(());
    }

    if cli.check {
        let config = Config::load()?;
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    // Call-to-action routing needs no data
    if let Some(name) = &cli.cta {
        match find_plan(name) {
            Some(plan) => {
                println!("{}", plan.cta_route().path());
                return Ok(());
            }
            None => {
                eprintln!("Error: Unknown plan '{}'", name);
                eprintln!("Valid plans: Starter, Pro, Enterprise");
                std::process::exit(1);
            }
        }
    }

    // Load configuration
    let mut config = ConfigLoader::load();
    if let Some(path) = &cli.data {
        config.source = SourceConfig::file(path.clone());
    }
    let billing = cli.billing.unwrap_or(config.default_billing);

    debug_println!("Using {:?} savings source", config.source.kind);
    let dataset = config.source.load_dataset()?;

    if cli.interactive {
        #[cfg(feature = "tui")]
        {
            use lastmile::ui::{App, Page};

            let page = if cli.pricing {
                Page::Pricing
            } else if cli.faq {
                Page::Faq
            } else {
                Page::Dashboard
            };
            let app = App::new(dataset, &config.currency_symbol, billing).with_page(page);
            lastmile::ui::run_dashboard(app)?;
        }
        #[cfg(not(feature = "tui"))]
        {
            eprintln!("TUI feature is not enabled. Please install with --features tui");
            std::process::exit(1);
        }
        return Ok(());
    }

    if cli.json {
        let report = DashboardReport::build(&dataset);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut sections: Vec<Box<dyn Section>> = Vec::new();
    if cli.dashboard || cli.wants_default_view() {
        sections.extend(dashboard_sections());
    }
    if cli.pricing {
        sections.extend(pricing_sections());
    }
    if cli.faq {
        sections.extend(faq_sections());
    }

    let ctx = ReportContext {
        dataset: &dataset,
        billing,
        currency: &config.currency_symbol,
    };
    let generator = ReportGenerator::new(config.color);
    println!("{}", generator.generate(&sections, &ctx));

    Ok(())
}
