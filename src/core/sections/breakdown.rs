use super::{bar, ReportContext, ReportLine, Section, SectionData, SectionId, Tone};
use crate::savings::aggregator::best_month;
use crate::utils::format_currency;

/// Per-month toll and fuel savings with a combined bar
pub struct BreakdownSection {
    bar_width: usize,
}

impl Default for BreakdownSection {
    fn default() -> Self {
        Self { bar_width: 24 }
    }
}

impl Section for BreakdownSection {
    fn collect(&self, ctx: &ReportContext) -> Option<SectionData> {
        let records = &ctx.dataset.records;
        if records.is_empty() {
            return Some(SectionData {
                title: "Savings Breakdown".to_string(),
                lines: vec![ReportLine::muted("No savings recorded yet")],
            });
        }

        let max = records
            .iter()
            .map(|r| r.combined_saved())
            .fold(0.0, f64::max);
        let best = best_month(records).map(|r| r.month.as_str());

        let mut lines: Vec<ReportLine> = records
            .iter()
            .map(|record| {
                let text = format!(
                    "{:<6}toll {:>10}  fuel {:>10}  {}",
                    record.month,
                    format_currency(ctx.currency, record.toll_saved),
                    format_currency(ctx.currency, record.fuel_saved),
                    bar(record.combined_saved(), max, self.bar_width)
                );
                let tone = if Some(record.month.as_str()) == best {
                    Tone::Positive
                } else {
                    Tone::Plain
                };
                ReportLine::new(text, tone)
            })
            .collect();

        if let Some(month) = best {
            lines.push(ReportLine::muted(format!("Best month: {}", month)));
        }

        Some(SectionData {
            title: "Savings Breakdown".to_string(),
            lines,
        })
    }

    fn id(&self) -> SectionId {
        SectionId::Breakdown
    }
}
