/// The simulation runs on an idealized calendar of fixed 30-day months.
/// Whether that simplification should ever give way to real month lengths is
/// an open product question; everything downstream assumes it.
pub const DAYS_PER_MONTH: u32 = 30;

/// A 1-based (month, day) position on the simulated calendar. Months count
/// from the start of the simulation and are not capped at 12, so a delivery
/// can land past the simulated horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeliveryDate {
    pub month: u32,
    pub day: u32,
}

impl DeliveryDate {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// The date `lead_time_days` after this one.
    pub fn after(self, lead_time_days: u32) -> Self {
        let total_days = (self.month - 1) * DAYS_PER_MONTH + (self.day - 1) + lead_time_days;
        Self {
            month: total_days / DAYS_PER_MONTH + 1,
            day: total_days % DAYS_PER_MONTH + 1,
        }
    }
}
