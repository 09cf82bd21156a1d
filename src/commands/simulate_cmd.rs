use crate::commands::base_commands::{Commands, ReportFileFormat};
use crate::commands::report_format::format_simulation_report;
use crate::services::demand_generator;
use crate::services::inventory_simulation::{derive_policy, simulate_inventory};
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::simulation_types::{SimulationReport, demand_statistics};

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        input,
        output,
        format,
    } = cmd
    {
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

        let policy = match derive_policy(&series, &scenario.policy) {
            Ok(policy) => policy,
            Err(e) => {
                eprintln!("Failed to derive replenishment policy: {e}");
                return;
            }
        };

        let result = match simulate_inventory(&series, &policy) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to simulate inventory: {e}");
                return;
            }
        };

        let report = SimulationReport {
            scenario: scenario.name.clone(),
            months_simulated: series.months.len(),
            demand: demand_statistics(&series),
            policy,
            overall_service_level: result.overall_service_level,
            months: result.months,
        };

        let contents = match serialize_report(&report, format) {
            Ok(contents) => contents,
            Err(message) => {
                eprintln!("{message}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write simulation report: {e}");
            return;
        }

        println!("{}", format_simulation_report(&report));
        println!("Simulation report written to {output}");
    }
}

fn serialize_report(report: &SimulationReport, format: ReportFileFormat) -> Result<String, String> {
    match format {
        ReportFileFormat::Yaml => serde_yaml::to_string(report)
            .map_err(|e| format!("Failed to serialize simulation report: {e}")),
        ReportFileFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("Failed to serialize simulation report: {e}")),
    }
}
