use super::{bar, ReportContext, ReportLine, Section, SectionData, SectionId};
use crate::savings::aggregator::total_trips;

pub struct TripsSection {
    bar_width: usize,
}

impl Default for TripsSection {
    fn default() -> Self {
        Self { bar_width: 24 }
    }
}

impl Section for TripsSection {
    fn collect(&self, ctx: &ReportContext) -> Option<SectionData> {
        let trips = &ctx.dataset.trips;
        if trips.is_empty() {
            return None;
        }

        let max = trips.iter().map(|t| t.trips).max().unwrap_or(0) as f64;
        let mut lines: Vec<ReportLine> = trips
            .iter()
            .map(|t| {
                ReportLine::plain(format!(
                    "{:<6}{:>4}  {}",
                    t.month,
                    t.trips,
                    bar(t.trips as f64, max, self.bar_width)
                ))
            })
            .collect();
        lines.push(ReportLine::muted(format!(
            "Number of Trips: {}",
            total_trips(trips)
        )));

        Some(SectionData {
            title: "Travel Frequency".to_string(),
            lines,
        })
    }

    fn id(&self) -> SectionId {
        SectionId::Trips
    }
}
