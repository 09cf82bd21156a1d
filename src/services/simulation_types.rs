use serde::Serialize;

use crate::domain::demand::DemandSeries;
use crate::domain::policy::PolicyParameters;

/// One simulated month of replenishment. This is the read-only contract
/// rendering collaborators consume; fields are never mutated after emission.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthResult {
    /// 1-based month number within the simulation.
    pub month: u32,
    /// Demand of the month, from the demand series.
    pub demand: u32,
    /// On-hand stock before day 1.
    pub stock_start: u32,
    /// Quantity delivered during the month.
    pub incoming_qty: u32,
    /// Orders placed during the month.
    pub orders: u32,
    /// Quantity ordered during the month.
    pub order_qty: u32,
    /// Demand served during the month, including recovered backorders.
    pub served: u32,
    pub served_days: u32,
    pub stockout_days: u32,
    /// Unserved demand carried into the next month.
    pub backorder: u32,
    /// On-hand stock after day 30.
    pub stock_end: u32,
    /// Pending order quantity still undelivered at month end.
    pub waiting_arrivals: u32,
    /// `served_days / 30`.
    pub service_level: f64,
}

/// Output of one simulation run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub months: Vec<MonthResult>,
    /// Fraction of all simulated days without a stockout, in `[0, 1]`.
    pub overall_service_level: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DemandStatistics {
    pub annual_demand: f64,
    pub daily_avg_demand: f64,
    pub daily_std_deviation: f64,
}

/// The full report written by the `simulate` command.
#[derive(Serialize, Debug, Clone)]
pub struct SimulationReport {
    pub scenario: String,
    pub months_simulated: usize,
    pub demand: DemandStatistics,
    pub policy: PolicyParameters,
    pub overall_service_level: f64,
    pub months: Vec<MonthResult>,
}

#[derive(Serialize, Debug, Clone)]
pub struct MonthDemandRecord {
    pub month: u32,
    pub total: u32,
    pub daily: Vec<u32>,
}

/// The demand series report written by the `generate` command.
#[derive(Serialize, Debug, Clone)]
pub struct DemandSeriesReport {
    pub scenario: String,
    pub demand: DemandStatistics,
    pub months: Vec<MonthDemandRecord>,
}

pub fn demand_statistics(series: &DemandSeries) -> DemandStatistics {
    DemandStatistics {
        annual_demand: series.annual_demand,
        daily_avg_demand: series.daily_avg_demand,
        daily_std_deviation: series.daily_std_deviation,
    }
}

pub fn demand_series_report(scenario: &str, series: &DemandSeries) -> DemandSeriesReport {
    let months = series
        .months
        .iter()
        .enumerate()
        .map(|(idx, month)| MonthDemandRecord {
            month: idx as u32 + 1,
            total: month.total,
            daily: month.daily.clone(),
        })
        .collect();

    DemandSeriesReport {
        scenario: scenario.to_string(),
        demand: demand_statistics(series),
        months,
    }
}
