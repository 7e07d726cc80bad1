use super::sections::{ReportContext, ReportLine, Section, SectionData, Tone};
use crate::savings::aggregator::total_trips;
use crate::savings::rewards::BadgeAccent;
use crate::savings::{
    evaluate_tiers, summarize, MonthlyRecord, RewardStatus, SavingsDataset, SavingsSummary,
    REWARD_TIERS,
};
use ansi_term::{Colour, Style};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Turns sections into terminal text
pub struct ReportGenerator {
    color: bool,
}

impl ReportGenerator {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn generate(&self, sections: &[Box<dyn Section>], ctx: &ReportContext) -> String {
        let blocks: Vec<String> = sections
            .iter()
            .filter_map(|section| section.collect(ctx))
            .map(|data| self.render_section(&data))
            .collect();
        blocks.join("\n\n")
    }

    fn render_section(&self, data: &SectionData) -> String {
        let underline = "─".repeat(data.title.chars().count());
        let mut out = vec![
            self.paint(&ReportLine::new(data.title.as_str(), Tone::Heading)),
            self.paint(&ReportLine::muted(underline)),
        ];
        out.extend(data.lines.iter().map(|line| self.paint(line)));
        out.join("\n")
    }

    fn paint(&self, line: &ReportLine) -> String {
        if !self.color || line.text.is_empty() {
            return line.text.clone();
        }
        let style = match line.tone {
            Tone::Plain => return line.text.clone(),
            Tone::Heading => Style::new().bold(),
            Tone::Muted => Colour::Fixed(245).normal(),
            Tone::Value => Colour::White.bold(),
            Tone::Positive => Colour::Green.normal(),
            Tone::Accent(accent) => accent_colour(accent).bold(),
        };
        style.paint(line.text.as_str()).to_string()
    }
}

/// Terminal colour for a badge accent
pub fn accent_colour(accent: BadgeAccent) -> Colour {
    match accent {
        BadgeAccent::Amber => Colour::RGB(245, 158, 11),
        BadgeAccent::DeepAmber => Colour::RGB(217, 119, 6),
        BadgeAccent::Green => Colour::RGB(22, 163, 74),
    }
}

/// Machine-readable dashboard for `--json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub summary: SavingsSummary,
    pub total_trips: u64,
    pub rewards: Vec<RewardStatus>,
    pub records: Vec<MonthlyRecord>,
}

impl DashboardReport {
    pub fn build(dataset: &SavingsDataset) -> Self {
        let summary = summarize(&dataset.records);
        Self {
            generated_at: Utc::now(),
            summary,
            total_trips: total_trips(&dataset.trips),
            rewards: evaluate_tiers(summary.total_saved, &REWARD_TIERS),
            records: dataset.records.clone(),
        }
    }
}
