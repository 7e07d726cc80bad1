use crate::savings::{MonthlyRecord, MonthlyTripCount, SavingsSummary};

/// Fold a record sequence into dashboard totals.
///
/// Pure: the input is only borrowed, and an empty slice yields all zeros.
pub fn summarize(records: &[MonthlyRecord]) -> SavingsSummary {
    let mut summary = records
        .iter()
        .fold(SavingsSummary::default(), |mut acc, record| {
            acc.total_time_saved += record.time_saved;
            acc.total_toll_saved += record.toll_saved;
            acc.total_fuel_saved += record.fuel_saved;
            acc
        });

    summary.total_saved = summary.total_toll_saved + summary.total_fuel_saved;
    summary
}

/// Total trips across the frequency series
pub fn total_trips(trips: &[MonthlyTripCount]) -> u64 {
    trips.iter().map(|t| t.trips as u64).sum()
}

/// Month with the largest combined (toll + fuel) saving, first one wins on ties
pub fn best_month(records: &[MonthlyRecord]) -> Option<&MonthlyRecord> {
    records.iter().fold(None, |best: Option<&MonthlyRecord>, record| match best {
        Some(b) if b.combined_saved() >= record.combined_saved() => Some(b),
        _ => Some(record),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::sample::{sample_records, sample_trips};

    #[test]
    fn test_summarize_sample_series() {
        let summary = summarize(&sample_records());
        assert_eq!(summary.total_time_saved, 40.0);
        assert_eq!(summary.total_toll_saved, 9000.0);
        assert_eq!(summary.total_fuel_saved, 12500.0);
        assert_eq!(summary.total_saved, 21500.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary, SavingsSummary::default());
        assert_eq!(summary.total_saved, 0.0);
    }

    #[test]
    fn test_total_is_toll_plus_fuel() {
        let records = vec![
            MonthlyRecord::new("Jul", 3.0, 700.0, 0.0),
            MonthlyRecord::new("Aug", 0.0, 0.0, 450.0),
            MonthlyRecord::new("Sep", 12.0, 1.0, 2.0),
        ];
        let summary = summarize(&records);
        assert_eq!(
            summary.total_toll_saved + summary.total_fuel_saved,
            summary.total_saved
        );
        // hours never leak into the money total
        assert_eq!(summary.total_saved, 1153.0);
        assert_eq!(summary.total_time_saved, 15.0);
    }

    #[test]
    fn test_summarize_does_not_mutate_input() {
        let records = sample_records();
        let before = records.clone();
        let first = summarize(&records);
        let second = summarize(&records);
        assert_eq!(records, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_trips() {
        assert_eq!(total_trips(&sample_trips()), 70);
        assert_eq!(total_trips(&[]), 0);
    }

    #[test]
    fn test_best_month() {
        let records = sample_records();
        assert_eq!(best_month(&records).map(|r| r.month.as_str()), Some("May"));
        assert!(best_month(&[]).is_none());
    }
}
