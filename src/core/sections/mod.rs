pub mod breakdown;
pub mod faq;
pub mod plans;
pub mod rewards;
pub mod summary;
pub mod trips;

use crate::pricing::BillingCycle;
use crate::savings::rewards::BadgeAccent;
use crate::savings::SavingsDataset;

/// Inputs every section renders from
pub struct ReportContext<'a> {
    pub dataset: &'a SavingsDataset,
    pub billing: BillingCycle,
    pub currency: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Summary,
    Breakdown,
    Trips,
    Rewards,
    Plans,
    Faq,
}

/// How a line should be painted when colour is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Muted,
    Value,
    Accent(BadgeAccent),
    Positive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub text: String,
    pub tone: Tone,
}

impl ReportLine {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionData {
    pub title: String,
    pub lines: Vec<ReportLine>,
}

pub trait Section {
    fn collect(&self, ctx: &ReportContext) -> Option<SectionData>;
    fn id(&self) -> SectionId;
}

pub use breakdown::BreakdownSection;
pub use faq::FaqSection;
pub use plans::PlansSection;
pub use rewards::RewardsSection;
pub use summary::SummarySection;
pub use trips::TripsSection;

pub fn dashboard_sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(SummarySection),
        Box::new(BreakdownSection::default()),
        Box::new(TripsSection::default()),
        Box::new(RewardsSection),
    ]
}

pub fn pricing_sections() -> Vec<Box<dyn Section>> {
    vec![Box::new(PlansSection)]
}

pub fn faq_sections() -> Vec<Box<dyn Section>> {
    vec![Box::new(FaqSection)]
}

/// Horizontal bar scaled against `max`, at least one cell for non-zero values
pub(crate) fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let ids: Vec<SectionId> = dashboard_sections().iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                SectionId::Summary,
                SectionId::Breakdown,
                SectionId::Trips,
                SectionId::Rewards
            ]
        );
        assert_eq!(pricing_sections()[0].id(), SectionId::Plans);
        assert_eq!(faq_sections()[0].id(), SectionId::Faq);
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0.0, 10.0, 20), "");
        assert_eq!(bar(5.0, 0.0, 20), "");
        assert_eq!(bar(10.0, 10.0, 20).chars().count(), 20);
        assert_eq!(bar(5.0, 10.0, 20).chars().count(), 10);
        assert_eq!(bar(0.01, 10.0, 20).chars().count(), 1);
    }
}
