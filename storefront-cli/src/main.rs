use std::process::ExitCode;
use storefront_cli::{init_tracing, run, Config};

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.filter);
    tracing::info!("Starting storefront demo");

    match run(&config) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!("Unexpected error: {}", err);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            tracing::error!("Unexpected error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
