use std::collections::HashMap;

use thiserror::Error;

use crate::domain::calendar::{DAYS_PER_MONTH, DeliveryDate};
use crate::domain::demand::DemandSeries;
use crate::domain::policy::{CostParameters, PolicyParameters};
use crate::services::simulation_types::{MonthResult, SimulationResult};
use crate::services::statistics::round_half_up;

#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error("holding cost must be greater than zero, got {0}")]
    InvalidHoldingCost(f64),
    #[error("demand series has no months")]
    EmptyDemandSeries,
}

/// Economic order quantity: `round(sqrt(2 D S / H))`. A non-positive
/// holding cost is rejected up front instead of surfacing as infinity.
pub fn economic_order_quantity(
    annual_demand: f64,
    setup_cost: f64,
    holding_cost: f64,
) -> Result<f64, SimulationError> {
    if holding_cost <= 0.0 {
        return Err(SimulationError::InvalidHoldingCost(holding_cost));
    }
    Ok(round_half_up(
        (2.0 * annual_demand * setup_cost / holding_cost).sqrt(),
    ))
}

/// Safety stock: `round(Z * sigma * sqrt(L))`.
pub fn safety_stock(daily_std_deviation: f64, lead_time_days: u32, service_z: f64) -> f64 {
    round_half_up(service_z * daily_std_deviation * f64::from(lead_time_days).sqrt())
}

/// Reorder point: `round(avg daily demand * L + safety stock)`.
pub fn reorder_point(daily_avg_demand: f64, lead_time_days: u32, safety_stock: f64) -> f64 {
    round_half_up(daily_avg_demand * f64::from(lead_time_days) + safety_stock)
}

/// Derives the full replenishment policy from a demand series and the cost
/// inputs.
pub fn derive_policy(
    series: &DemandSeries,
    costs: &CostParameters,
) -> Result<PolicyParameters, SimulationError> {
    let eoq = economic_order_quantity(series.annual_demand, costs.setup_cost, costs.holding_cost)?;
    let safety = safety_stock(
        series.daily_std_deviation,
        costs.lead_time_days,
        costs.service_z,
    );
    let rop = reorder_point(series.daily_avg_demand, costs.lead_time_days, safety);
    Ok(PolicyParameters {
        eoq,
        safety_stock: safety,
        reorder_point: rop,
        lead_time_days: costs.lead_time_days,
    })
}

/// Runs the day-by-day replenishment simulation against a demand series.
///
/// Each day applies three phases in a fixed order: deliveries arrive, then
/// the reorder decision is taken on the inventory position (on-hand stock
/// plus every pending order), then demand is fulfilled. Unserved demand
/// becomes backorder and rolls into the next day. The order of the phases
/// is load-bearing: an arrival counts toward today's fulfillment, and an
/// order placed today cannot.
pub fn simulate_inventory(
    series: &DemandSeries,
    policy: &PolicyParameters,
) -> Result<SimulationResult, SimulationError> {
    if series.months.is_empty() {
        return Err(SimulationError::EmptyDemandSeries);
    }

    // Starting stock approximates the steady-state average so the run does
    // not open with an artificial stockout transient.
    let mut stock = policy.reorder_point + policy.eoq / 2.0;
    let mut on_order: HashMap<DeliveryDate, f64> = HashMap::new();
    let mut backorder = 0.0_f64;
    let mut total_stockout_days: u32 = 0;
    let order_quantity = round_half_up(policy.eoq);

    let mut months = Vec::with_capacity(series.months.len());
    for (idx, month) in series.months.iter().enumerate() {
        let month_label = idx as u32 + 1;
        let stock_start = stock;
        let mut served = 0.0_f64;
        let mut incoming_qty = 0.0_f64;
        let mut order_placed_qty = 0.0_f64;
        let mut orders_placed: u32 = 0;
        let mut stockout_days: u32 = 0;

        for day in 1..=DAYS_PER_MONTH {
            let today = DeliveryDate::new(month_label, day);

            if let Some(quantity) = on_order.remove(&today) {
                incoming_qty += quantity;
                stock += quantity;
            }

            let waiting_arrivals: f64 = on_order.values().sum();
            if stock + waiting_arrivals < policy.reorder_point {
                let arrival = today.after(policy.lead_time_days);
                // Two orders scheduled for the same arrival date would
                // overwrite each other here; see the open questions in
                // DESIGN.md.
                on_order.insert(arrival, order_quantity);
                order_placed_qty += order_quantity;
                orders_placed += 1;
            }

            let effective_demand = f64::from(month.daily[day as usize - 1]) + backorder;
            if effective_demand > stock {
                stockout_days += 1;
                total_stockout_days += 1;
            }
            backorder = (effective_demand - stock).max(0.0);
            let served_today = effective_demand.min(stock);
            served += served_today;
            stock -= served_today;
        }

        let waiting_arrivals: f64 = on_order.values().sum();
        months.push(MonthResult {
            month: month_label,
            demand: month.total,
            stock_start: round_half_up(stock_start) as u32,
            incoming_qty: incoming_qty as u32,
            orders: orders_placed,
            order_qty: order_placed_qty as u32,
            served: round_half_up(served) as u32,
            served_days: DAYS_PER_MONTH - stockout_days,
            stockout_days,
            backorder: round_half_up(backorder) as u32,
            stock_end: round_half_up(stock) as u32,
            waiting_arrivals: round_half_up(waiting_arrivals) as u32,
            service_level: f64::from(DAYS_PER_MONTH - stockout_days) / f64::from(DAYS_PER_MONTH),
        });
    }

    let total_days = series.months.len() as u32 * DAYS_PER_MONTH;
    Ok(SimulationResult {
        months,
        overall_service_level: f64::from(total_days - total_stockout_days) / f64::from(total_days),
    })
}
