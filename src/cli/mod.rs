// src/cli/mod.rs
use clap::Parser;

pub mod prompt;
pub mod session;

pub use session::run_session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed the generator for reproducible passwords
    #[arg(long, env = "PASSGEN_SEED")]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
