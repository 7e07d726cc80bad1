use crate::savings::{MonthlyRecord, MonthlyTripCount, SavingsDataset};

/// Jan..Jun demo series shown until a real source is configured
pub fn sample_records() -> Vec<MonthlyRecord> {
    vec![
        MonthlyRecord::new("Jan", 5.0, 1200.0, 1800.0),
        MonthlyRecord::new("Feb", 7.0, 1500.0, 2100.0),
        MonthlyRecord::new("Mar", 4.0, 1100.0, 1600.0),
        MonthlyRecord::new("Apr", 8.0, 1700.0, 2300.0),
        MonthlyRecord::new("May", 9.0, 1900.0, 2500.0),
        MonthlyRecord::new("Jun", 7.0, 1600.0, 2200.0),
    ]
}

pub fn sample_trips() -> Vec<MonthlyTripCount> {
    vec![
        MonthlyTripCount::new("Jan", 8),
        MonthlyTripCount::new("Feb", 12),
        MonthlyTripCount::new("Mar", 7),
        MonthlyTripCount::new("Apr", 14),
        MonthlyTripCount::new("May", 16),
        MonthlyTripCount::new("Jun", 13),
    ]
}

pub fn sample_dataset() -> SavingsDataset {
    SavingsDataset {
        records: sample_records(),
        trips: sample_trips(),
    }
}
