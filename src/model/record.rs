use crate::error::ZoneError;
use std::fmt::Display;
use std::net::IpAddr;
use std::str::FromStr;

/// An IP network given as address plus prefix length.
///
/// The address is kept exactly as written; host bits are only masked off when testing membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    network: IpAddr,
    prefix_len: u8,
}

impl Prefix {
    pub fn new(network: IpAddr, prefix_len: u8) -> Result<Self, ZoneError> {
        let max_len = max_prefix_len(&network);

        if prefix_len > max_len {
            return Err(ZoneError::InvalidPrefix {
                input: format!("{}/{}", network, prefix_len),
                reason: format!("prefix length must be at most {}", max_len),
            });
        }

        Ok(Prefix { network, prefix_len })
    }

    pub fn network(&self) -> IpAddr {
        self.network
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn is_ipv4(&self) -> bool {
        self.network.is_ipv4()
    }

    /// Whether `addr` falls inside this network. Addresses of the other family never match.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match (self.network, addr) {
            (IpAddr::V4(network), IpAddr::V4(addr)) => {
                let mask = match self.prefix_len {
                    0 => 0,
                    len => u32::MAX << (32 - u32::from(len)),
                };

                u32::from(network) & mask == u32::from(addr) & mask
            }
            (IpAddr::V6(network), IpAddr::V6(addr)) => {
                let mask = match self.prefix_len {
                    0 => 0,
                    len => u128::MAX << (128 - u32::from(len)),
                };

                u128::from(network) & mask == u128::from(addr) & mask
            }
            _ => false,
        }
    }
}

fn max_prefix_len(network: &IpAddr) -> u8 {
    match network {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

impl FromStr for Prefix {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ZoneError::InvalidPrefix {
            input: s.to_string(),
            reason,
        };

        let (network, prefix_len) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("expected <address>/<length>".to_string()))?;

        let network = network
            .parse::<IpAddr>()
            .map_err(|e| invalid(format!("Invalid IP address: {}", e)))?;
        let prefix_len = prefix_len
            .parse::<u8>()
            .map_err(|e| invalid(format!("Invalid prefix length: {}", e)))?;

        if prefix_len > max_prefix_len(&network) {
            return Err(invalid(format!(
                "prefix length must be at most {}",
                max_prefix_len(&network)
            )));
        }

        Ok(Prefix { network, prefix_len })
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}
