mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::generate_cmd::generate_command;
use crate::commands::simulate_cmd::simulate_command;
use clap::{CommandFactory, Parser};

fn main() {
    let args = CliArgs::parse();
    match args.command {
        Commands::Generate { .. } => generate_command(args.command),
        Commands::Simulate { .. } => simulate_command(args.command),
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }
}
