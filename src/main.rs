// Entry point of `php-tooling`: parses the command line, sets up logging and hands off to
// the selected command. Every error ends the run with exit status 1.

mod cli;
mod commands;
mod installers;
mod libs;
mod logger;
mod schemas;

use clap::Parser;

use crate::cli::cmd_enums::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args),
        Commands::Services { project_dir, json } => commands::services::run(project_dir, json),
    };

    if let Err(err) = result {
        log_error!("{:#}", err);
        std::process::exit(1);
    }
}
