pub mod aggregator;
pub mod remote;
pub mod rewards;
pub mod sample;
pub mod source;
pub mod types;

pub use aggregator::summarize;
pub use rewards::{evaluate_tiers, BadgeAccent, RewardStatus, RewardTier, REWARD_TIERS};
pub use source::{FileSource, SampleSource, SavingsSource, SourceError};
pub use types::{MonthlyRecord, MonthlyTripCount, SavingsDataset, SavingsSummary};
