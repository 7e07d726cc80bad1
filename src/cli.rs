use crate::pricing::BillingCycle;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lastmile")]
#[command(version, about = "Fleet savings dashboard and pricing for the terminal")]
pub struct Cli {
    /// Print the savings dashboard (default)
    #[arg(short = 'd', long = "dashboard")]
    pub dashboard: bool,

    /// Print the pricing plans
    #[arg(short = 'p', long = "pricing")]
    pub pricing: bool,

    /// Print the frequently asked questions
    #[arg(long = "faq")]
    pub faq: bool,

    /// Billing cycle for the pricing plans
    #[arg(short = 'b', long = "billing", value_enum, value_name = "CYCLE")]
    pub billing: Option<BillingCycle>,

    /// Read savings records from a JSON file
    #[arg(long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Emit the dashboard summary as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Show where a plan's call-to-action leads
    #[arg(long = "cta", value_name = "PLAN")]
    pub cta: Option<String>,

    /// Open the interactive dashboard
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// True when no view flag was given, so the dashboard is printed
    pub fn wants_default_view(&self) -> bool {
        !(self.dashboard || self.pricing || self.faq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_billing_and_views() {
        let cli = Cli::parse_from(["lastmile", "--pricing", "--billing", "yearly"]);
        assert!(cli.pricing);
        assert_eq!(cli.billing, Some(BillingCycle::Yearly));
        assert!(!cli.wants_default_view());

        let cli = Cli::parse_from(["lastmile"]);
        assert!(cli.wants_default_view());
        assert_eq!(cli.billing, None);
    }

    #[test]
    fn test_rejects_unknown_billing() {
        assert!(Cli::try_parse_from(["lastmile", "-b", "weekly"]).is_err());
    }
}
