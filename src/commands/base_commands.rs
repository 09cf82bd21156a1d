use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic demand series from a scenario file
    Generate {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Simulate ROP/EOQ replenishment against a generated demand series
    Simulate {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output report file
        #[arg(short, long)]
        output: String,
        /// Report serialization format
        #[arg(short, long, value_enum, default_value_t = ReportFileFormat::Yaml)]
        format: ReportFileFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFileFormat {
    Yaml,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_defaults_to_yaml_format() {
        let args = CliArgs::parse_from([
            "stocksim",
            "simulate",
            "-i",
            "scenario.yaml",
            "-o",
            "report.yaml",
        ]);

        if let Commands::Simulate { format, .. } = args.command {
            assert_eq!(format, ReportFileFormat::Yaml);
        } else {
            panic!("expected simulate command");
        }
    }

    #[test]
    fn simulate_accepts_json_format() {
        let args = CliArgs::parse_from([
            "stocksim",
            "simulate",
            "-i",
            "scenario.yaml",
            "-o",
            "report.json",
            "-f",
            "json",
        ]);

        if let Commands::Simulate { format, .. } = args.command {
            assert_eq!(format, ReportFileFormat::Json);
        } else {
            panic!("expected simulate command");
        }
    }

    #[test]
    fn generate_parses_input_and_output() {
        let args = CliArgs::parse_from([
            "stocksim",
            "generate",
            "-i",
            "scenario.yaml",
            "-o",
            "demand.yaml",
        ]);

        if let Commands::Generate { input, output } = args.command {
            assert_eq!(input, "scenario.yaml");
            assert_eq!(output, "demand.yaml");
        } else {
            panic!("expected generate command");
        }
    }
}
