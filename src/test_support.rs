use crate::domain::calendar::DAYS_PER_MONTH;
use crate::domain::demand::{DemandSeries, MonthDemand};
use crate::domain::policy::PolicyParameters;

/// A series whose months all have the same flat daily demand, with the
/// aggregate statistics filled in to match.
pub fn build_flat_series(daily_value: u32, months: usize) -> DemandSeries {
    let month = MonthDemand {
        total: daily_value * DAYS_PER_MONTH,
        daily: vec![daily_value; DAYS_PER_MONTH as usize],
    };
    let annual_demand = f64::from(month.total) * 12.0;

    DemandSeries {
        months: vec![month; months],
        annual_demand,
        daily_avg_demand: annual_demand / 365.0,
        daily_std_deviation: 0.0,
    }
}

/// A policy with no safety stock, for exercising the simulator directly.
pub fn build_policy(eoq: f64, reorder_point: f64, lead_time_days: u32) -> PolicyParameters {
    PolicyParameters {
        eoq,
        safety_stock: 0.0,
        reorder_point,
        lead_time_days,
    }
}
