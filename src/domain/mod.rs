pub mod calendar;
pub mod demand;
pub mod policy;
