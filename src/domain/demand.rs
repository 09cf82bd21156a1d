use serde::{Deserialize, Serialize};

/// Inputs to the synthetic demand generator. Deserialized directly from the
/// `demand` section of a scenario file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DemandParameters {
    /// PRNG seed; values wider than 32 bits are truncated, never rejected.
    pub seed: u64,
    /// Number of simulated months, at least 1.
    pub months: u32,
    /// Demand level in month 0, before trend, seasonality and noise.
    pub base_level: f64,
    /// Additive trend per month.
    pub trend_per_period: f64,
    /// Standard deviation of the Gaussian noise on monthly totals.
    pub noise_std: f64,
    /// Month of the year (1..=12) whose demand is scaled by `peak_factor`.
    pub peak_month: u32,
    pub peak_factor: f64,
}

/// One simulated month: a total and its 30-day decomposition. The daily
/// values always sum back to `total` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDemand {
    pub total: u32,
    pub daily: Vec<u32>,
}

/// A generated demand history plus the aggregate statistics the policy
/// formulas consume. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandSeries {
    pub months: Vec<MonthDemand>,
    /// Total demand normalized to a 12-month-equivalent annual rate.
    pub annual_demand: f64,
    /// `annual_demand / 365`.
    pub daily_avg_demand: f64,
    /// Sample standard deviation over all daily values of all months.
    pub daily_std_deviation: f64,
}
