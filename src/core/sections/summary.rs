use super::{ReportContext, ReportLine, Section, SectionData, SectionId, Tone};
use crate::savings::summarize;
use crate::utils::{format_currency, format_hours};

pub const WELCOME: &str = "Welcome back! Here's your savings summary.";

/// The three headline cards
pub struct SummarySection;

impl Section for SummarySection {
    fn collect(&self, ctx: &ReportContext) -> Option<SectionData> {
        let summary = summarize(&ctx.dataset.records);

        let cards = [
            (
                "Time Saved",
                format_hours(summary.total_time_saved),
                "Compared to longest routes",
            ),
            (
                "Toll Saved",
                format_currency(ctx.currency, summary.total_toll_saved),
                "From optimal route selection",
            ),
            (
                "Fuel Saved",
                format_currency(ctx.currency, summary.total_fuel_saved),
                "Based on current diesel prices",
            ),
        ];

        let mut lines = vec![ReportLine::muted(WELCOME), ReportLine::plain("")];
        for (title, value, caption) in cards {
            lines.push(ReportLine::new(format!("{:<12}{}", title, value), Tone::Value));
            lines.push(ReportLine::muted(format!("{:<12}{}", "", caption)));
        }

        Some(SectionData {
            title: "Dashboard".to_string(),
            lines,
        })
    }

    fn id(&self) -> SectionId {
        SectionId::Summary
    }
}
