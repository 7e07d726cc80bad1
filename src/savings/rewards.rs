use crate::utils::format_amount;
use serde::Serialize;

/// Colour family a badge uses once unlocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeAccent {
    Amber,
    DeepAmber,
    Green,
}

/// One row of the reward table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RewardTier {
    pub threshold: f64,
    pub label: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub caption: &'static str,
    pub accent: BadgeAccent,
}

/// Fixed tiers, ascending by threshold
pub const REWARD_TIERS: [RewardTier; 3] = [
    RewardTier {
        threshold: 10_000.0,
        label: "Star",
        title: "Star Badge",
        icon: "⭐",
        caption: "Save ₹10,000+ in a year",
        accent: BadgeAccent::Amber,
    },
    RewardTier {
        threshold: 50_000.0,
        label: "Gold",
        title: "Gold Badge",
        icon: "🏆",
        caption: "Save ₹50,000+ in a year",
        accent: BadgeAccent::DeepAmber,
    },
    RewardTier {
        threshold: 100_000.0,
        label: "₹10,000 Bonus",
        title: "₹10,000 Bonus",
        icon: "💰",
        caption: "Save ₹100,000+ in a year",
        accent: BadgeAccent::Green,
    },
];

/// A tier evaluated against a total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RewardStatus {
    pub tier: RewardTier,
    pub total_saved: f64,
    pub unlocked: bool,
}

impl RewardStatus {
    /// `"21,400 / 50,000"` while locked, `None` once unlocked
    pub fn progress(&self) -> Option<String> {
        self.progress_with("")
    }

    /// Same as [`progress`](Self::progress) with a currency symbol on both sides
    pub fn progress_with(&self, currency: &str) -> Option<String> {
        if self.unlocked {
            return None;
        }
        Some(format!(
            "{}{} / {}{}",
            currency,
            format_amount(self.total_saved),
            currency,
            format_amount(self.tier.threshold)
        ))
    }

    /// Fraction of the threshold reached, capped at 1.0
    pub fn ratio(&self) -> f64 {
        if self.tier.threshold <= 0.0 {
            return 1.0;
        }
        (self.total_saved / self.tier.threshold).clamp(0.0, 1.0)
    }
}

/// Evaluate every tier independently. Reaching a threshold exactly counts as unlocked.
pub fn evaluate_tiers(total_saved: f64, tiers: &[RewardTier]) -> Vec<RewardStatus> {
    tiers
        .iter()
        .map(|tier| RewardStatus {
            tier: *tier,
            total_saved,
            unlocked: total_saved >= tier.threshold,
        })
        .collect()
}

/// Highest unlocked tier, if any
pub fn highest_unlocked(statuses: &[RewardStatus]) -> Option<&RewardStatus> {
    statuses
        .iter()
        .filter(|s| s.unlocked)
        .max_by(|a, b| a.tier.threshold.total_cmp(&b.tier.threshold))
}
