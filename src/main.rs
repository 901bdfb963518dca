mod classify;
mod cli;
mod demo;
mod error;
mod init;
mod serve;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            log_level,
        } => serve::execute(serve::ServeArgs {
            config_path: config,
            host,
            port,
            log_level,
        }),
        Commands::Classify {
            width,
            height,
            length,
            mass,
            json,
        } => classify::execute(classify::ClassifyArgs {
            width,
            height,
            length,
            mass,
            json,
        }),
        Commands::Demo => demo::execute(),
        Commands::Init { config, force } => init::execute(config, force),
    };

    if let Err(err) = result {
        ui::error_message(&format!("Error: {}", err.user_message()));
        process::exit(1);
    }
}
