use std::{net::IpAddr, str::FromStr};

use derive_more::{AsRef, Debug, Display};

/// Opaque URL path token from a log line. No normalization: case and
/// trailing slashes stay as observed.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

/// Textual IP address that parsed as a valid IPv4 or IPv6 literal.
/// The token text is kept as-is; visitor uniqueness is over the text
/// exactly as it appeared in the log.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct ClientIp(String);

impl FromStr for ClientIp {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IpAddr>()?;
        Ok(Self(s.into()))
    }
}
