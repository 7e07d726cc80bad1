use serde::{Deserialize, Serialize};

/// One month's savings figures
///
/// Numeric fields missing from an input document deserialize as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub month: String,
    /// Hours saved against the longest route
    #[serde(default)]
    pub time_saved: f64,
    /// Currency units
    #[serde(default)]
    pub toll_saved: f64,
    /// Currency units
    #[serde(default)]
    pub fuel_saved: f64,
}

impl MonthlyRecord {
    pub fn new(month: &str, time_saved: f64, toll_saved: f64, fuel_saved: f64) -> Self {
        Self {
            month: month.to_string(),
            time_saved,
            toll_saved,
            fuel_saved,
        }
    }

    /// Toll plus fuel for this month
    pub fn combined_saved(&self) -> f64 {
        self.toll_saved + self.fuel_saved
    }
}

/// Trip count for one month (travel frequency chart)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTripCount {
    pub month: String,
    #[serde(default)]
    pub trips: u32,
}

impl MonthlyTripCount {
    pub fn new(month: &str, trips: u32) -> Self {
        Self {
            month: month.to_string(),
            trips,
        }
    }
}

/// Everything a data source hands to the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsDataset {
    pub records: Vec<MonthlyRecord>,
    #[serde(default)]
    pub trips: Vec<MonthlyTripCount>,
}

/// Totals derived from a record sequence. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub total_time_saved: f64,
    pub total_toll_saved: f64,
    pub total_fuel_saved: f64,
    /// Toll + fuel. Time is tracked separately and is not money.
    pub total_saved: f64,
}
