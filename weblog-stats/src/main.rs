mod analytics;
mod error;
mod invariants;
mod models;
mod parser;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use models::TrafficReport;
use num_format::{Locale, ToFormattedString};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the access log to analyze (.txt or .log)
    log_file: PathBuf,
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    match parser::parse_weblog(&args.log_file) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_report(report: &TrafficReport) {
    print_ranking("Most page views:", &report.most_visits);
    println!();
    print_ranking("Unique page views:", &report.unique_visits);
}

fn print_ranking(title: &str, ranking: &[(String, usize)]) {
    println!("{title}");
    for (url, count) in ranking {
        println!("{url} {}", count.to_formatted_string(&Locale::en));
    }
}
