use crate::invariants::{ClientIp, Endpoint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub url: Endpoint,
    pub ip: ClientIp,
}

/// The two rankings produced by one pass over a log file, in the order
/// (most visits, unique visits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficReport {
    pub most_visits: Vec<(String, usize)>,
    pub unique_visits: Vec<(String, usize)>,
}
