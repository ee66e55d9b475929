#![cfg_attr(test, allow(unused_crate_dependencies))]
#![forbid(unsafe_code)]

mod cli_input;
mod discover;
mod errors;
mod generate;

use clap::Parser;
use cli_input::Args;
use errors::CliError;
use graphql_doc_config::DocConfig;
use std::{fs, process};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let args = Args::parse();

    let exit_code = match try_main(args) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    };

    process::exit(exit_code);
}

fn try_main(args: Args) -> Result<(), CliError> {
    let filter = {
        let builder = EnvFilter::builder();
        match args.log_filter.as_deref() {
            Some(argument_filter) => builder.parse_lossy(argument_filter),
            None => builder.from_env_lossy(),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = if args.config.is_file() {
        DocConfig::load(&args.config)?
    } else {
        tracing::debug!(path = %args.config.display(), "no configuration file, using defaults");
        DocConfig::default()
    };

    if !config.enabled {
        tracing::info!("documentation is disabled, set `enabled = true` to generate it");
        return Ok(());
    }

    let page = generate::generate(&config, &args.root)?;

    match args.output {
        Some(path) => fs::write(&path, page).map_err(|error| CliError::WriteOutput(path, error))?,
        None => println!("{page}"),
    }

    Ok(())
}
