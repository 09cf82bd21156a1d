use crate::services::simulation_types::{MonthResult, SimulationReport};

/// Renders a simulation report as a plain-text summary with one table row
/// per month. Reads the month records only; it owns no simulation state.
pub fn format_simulation_report(report: &SimulationReport) -> String {
    let mut lines = Vec::new();
    lines.push("Replenishment Simulation Report".to_string());
    lines.push(format!("Scenario: {}", report.scenario));
    lines.push(format!("Months simulated: {}", report.months_simulated));
    lines.push(format!(
        "Annual demand: {:.0} | Avg daily demand: {:.2} | Daily std deviation: {:.2}",
        report.demand.annual_demand,
        report.demand.daily_avg_demand,
        report.demand.daily_std_deviation
    ));
    lines.push(format!(
        "EOQ: {:.0} | Safety stock: {:.0} | Reorder point: {:.0} | Lead time: {} days",
        report.policy.eoq,
        report.policy.safety_stock,
        report.policy.reorder_point,
        report.policy.lead_time_days
    ));
    lines.push(format!(
        "Overall service level: {:.1}%",
        report.overall_service_level * 100.0
    ));
    lines.push(String::new());
    lines.push("Month | Demand | Start | Incoming | Orders | Served | Stockout days | Backorder | End | Service".to_string());
    lines.push("------|--------|-------|----------|--------|--------|---------------|-----------|-----|--------".to_string());
    for month in &report.months {
        lines.push(format_month_row(month));
    }

    lines.join("\n")
}

fn format_month_row(month: &MonthResult) -> String {
    format!(
        "{} | {} | {} | {} | {} | {} | {} | {} | {} | {:.1}%",
        month.month,
        month.demand,
        month.stock_start,
        month.incoming_qty,
        month.orders,
        month.served,
        month.stockout_days,
        month.backorder,
        month.stock_end,
        month.service_level * 100.0
    )
}
