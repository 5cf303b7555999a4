//! fibro - FibroDetect CLI
//!
//! # Examples
//!
//! ```bash
//! # Log in (the credential is kept in .fibro/session.json)
//! fibro login --email martin.dubois@hopital.fr --password s3cret
//!
//! # What can I open?
//! fibro nav --pretty
//!
//! # Search patients
//! fibro patient list --search durand
//!
//! # Submit an image for analysis
//! fibro diagnostic create --patient-id 12 --image scan.png
//! ```

use fd_cli::{App, Cli, CliResult, logger};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command, cli.server.as_deref()).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: fd_cli::commands::Commands, server: Option<&str>) -> CliResult<Value> {
    let config = fd_config::Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    logger::initialize(&config.logging, log_file.as_deref())?;
    config.log_summary();

    let mut app = App::from_config(&config, server)?;
    app.run(command).await
}
