use crate::commands::base_commands::Commands;
use crate::services::demand_generator;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::simulation_types::demand_series_report;

pub fn generate_command(cmd: Commands) {
    if let Commands::Generate { input, output } = cmd {
        let scenario = match load_scenario_from_yaml_file(&input) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {e}");
                return;
            }
        };

        let series = match demand_generator::generate(&scenario.demand) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("Failed to generate demand series: {e}");
                return;
            }
        };

        let report = demand_series_report(&scenario.name, &series);
        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize demand series: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write demand series: {e}");
        } else {
            println!(
                "Demand series for {} months written to {output}",
                report.months.len()
            );
        }
    }
}
