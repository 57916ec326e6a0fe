use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "weblog-noise")]
#[command(about = "Generate fake weblog files for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value = "server.log")]
    output: PathBuf,

    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// Percentage of lines given a malformed IP field
    #[arg(long, default_value_t = 5)]
    invalid_percent: u8,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}
