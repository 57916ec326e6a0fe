use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{
    analytics::Analytics,
    error::AnalyzerError,
    models::{LogLine, TrafficReport},
};

const SUPPORTED_EXTENSIONS: [&str; 2] = ["txt", "log"];

/// Accepts only paths whose extension is in the supported set,
/// case-insensitively. Pure string inspection: the file is not touched.
pub fn check_file_extension(path: &Path) -> Result<(), AnalyzerError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .map(|_| ())
        .ok_or(AnalyzerError::InvalidInput)
}

/// Splits a line into `<url> <ip>`. Tokens beyond the second are ignored.
/// Returns None when a token is missing or the second token is not a
/// valid IPv4/IPv6 literal.
fn parse_log_line(line: &str) -> Option<LogLine> {
    let mut parts = line.split_whitespace();
    let url = parts.next()?.into();
    let ip = parts.next()?.parse().ok()?;
    Some(LogLine { url, ip })
}

/// Single pass over log lines: records well-formed entries, skips the
/// rest. A read failure aborts the pass.
pub fn aggregate<R: BufRead>(reader: R) -> Result<Analytics, AnalyzerError> {
    let mut analytics = Analytics::default();
    let mut total = 0usize;
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        total += 1;
        match parse_log_line(&line) {
            Some(LogLine { url, ip }) => analytics.record_visit(url, ip),
            None => skipped += 1,
        }
    }
    debug!(total, skipped, "finished log pass");
    Ok(analytics)
}

/// Parses a weblog file into its two visit rankings.
pub fn parse_weblog(path: &Path) -> Result<TrafficReport, AnalyzerError> {
    check_file_extension(path)?;
    let file = File::open(path)?;
    let analytics = aggregate(BufReader::new(file))?;
    Ok(TrafficReport {
        most_visits: analytics.most_visits(),
        unique_visits: analytics.unique_visits(),
    })
}
