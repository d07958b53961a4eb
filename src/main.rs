use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod models;

use crate::cli::Args;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

fn init_logging(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { log::LevelFilter::Debug } else { config.log_level };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    // Never log to stdout, it carries the prompts
    match &config.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let loaded_env = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let config = Config::load();
    init_logging(&config, args.verbose)?;

    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    log::debug!("Loaded .env file: {}", loaded_env);
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let mut generator = match args.seed {
        Some(seed) => {
            log::info!("Using seeded generator");
            PasswordGenerator::from_seed(seed)
        }
        None => PasswordGenerator::new(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    cli::run_session(&mut input, &mut output, &mut generator).map_err(|e| {
        log::error!("Session failed: {}", e);
        e
    })?;

    Ok(())
}
