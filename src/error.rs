use std::net::IpAddr;
use thiserror::Error;

/// Configuration errors: the requested zones cannot be generated as given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("No zones specified. Provide at least one forward or reverse zone")]
    NoZones,
    #[error("Invalid reverse zone prefix {input:?}: {reason}")]
    InvalidPrefix { input: String, reason: String },
    #[error("Unsupported reverse zone prefix size /{prefix_len} for {network}. {supported}")]
    UnsupportedPrefixLength {
        network: IpAddr,
        prefix_len: u8,
        supported: &'static str,
    },
}

/// Input errors raised while turning source records into hosts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Host {host:?} has an invalid {field} value {value:?}: {reason}")]
    InvalidAddress {
        host: String,
        field: &'static str,
        value: String,
        reason: String,
    },
}
