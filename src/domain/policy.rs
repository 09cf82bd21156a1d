use serde::{Deserialize, Serialize};

/// Cost and service inputs the policy formulas are derived from.
/// Deserialized directly from the `policy` section of a scenario file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CostParameters {
    /// Fixed cost of placing one order.
    pub setup_cost: f64,
    /// Annual holding cost per unit, must be positive.
    pub holding_cost: f64,
    /// Service-level z-score for the safety stock.
    pub service_z: f64,
    pub lead_time_days: u32,
}

/// Replenishment policy driving the simulator: order `eoq` units whenever
/// the inventory position drops below `reorder_point`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PolicyParameters {
    pub eoq: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
    pub lead_time_days: u32,
}
