pub mod base_commands;
pub mod generate_cmd;
pub mod report_format;
pub mod simulate_cmd;
