use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error, From)]
pub enum AnalyzerError {
    /// Unsupported or missing file extension.
    #[display("Invalid file path")]
    InvalidInput,

    /// The log file could not be opened or read.
    #[display("failed to read log file: {source}")]
    #[from]
    Io { source: std::io::Error },
}
