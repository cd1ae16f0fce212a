//! Courier - Main Entry Point
//!
//! Loads a Postman collection from disk, substitutes the given variables
//! and prints the resulting request tree.

mod cli;
mod summary;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use courier_application::{LoadCollectionInput, LoaderConfig};
use courier_infrastructure::file_loader;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = LoaderConfig::default();
    if let Some(max) = cli.max_size {
        config = config.with_max_document_size(max);
    }
    let loader = file_loader(&cli.root).with_config(config);

    let input = cli
        .variables
        .into_iter()
        .fold(LoadCollectionInput::new(cli.resource), |input, (key, value)| {
            input.with_variable(key, value)
        });

    tracing::debug!(root = %cli.root.display(), "Loading collection");
    let collection = loader.execute(input)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&collection)?);
    } else {
        print!("{}", summary::render(&collection));
    }
    Ok(())
}
