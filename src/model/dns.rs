use crate::model::record::Prefix;
use std::fmt;
use std::fmt::Display;
use std::net::{Ipv4Addr, Ipv6Addr};
use strum::{AsRefStr, Display as StrumDisplay};

/// Returns `name` in absolute form, ending with exactly the dot it already had or one appended.
pub fn with_trailing_dot(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Strips one trailing dot, if present.
pub fn without_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// A host from the source file. Either address family may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host {
    pub name: String,
    pub ipv4: Option<Ipv4Addr>,
    pub ipv6: Option<Ipv6Addr>,
}

impl Host {
    pub fn new(name: &str, ipv4: Option<Ipv4Addr>, ipv6: Option<Ipv6Addr>) -> Self {
        Host {
            name: name.to_string(),
            ipv4,
            ipv6,
        }
    }
}

/// A zone to generate: a forward domain suffix or a reverse network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Zone {
    Forward(String),
    Reverse(Prefix),
}

impl Zone {
    pub fn kind(&self) -> &'static str {
        match self {
            Zone::Forward(_) => "forward",
            Zone::Reverse(_) => "reverse",
        }
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Forward(name) => write!(f, "{}", name),
            Zone::Reverse(prefix) => write!(f, "{}", prefix),
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, StrumDisplay)]
pub enum DNSClass {
    IN,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, AsRefStr)]
pub enum DNSRecordData {
    A(Ipv4Addr),
    PTR(String),
}

impl DNSRecordData {
    pub fn type_str(&self) -> &str {
        self.as_ref()
    }
}

impl Display for DNSRecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DNSRecordData::A(ipv4) => write!(f, "{}", ipv4),
            DNSRecordData::PTR(target) => write!(f, "{}", target),
        }
    }
}

/// One resource record, rendered as `<owner> <class> <type> <rdata>`.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct DNSRecord {
    pub name: String,
    pub class: DNSClass,
    pub data: DNSRecordData,
}

impl DNSRecord {
    pub fn a(name: &str, ipv4: Ipv4Addr) -> Self {
        DNSRecord {
            name: with_trailing_dot(name),
            class: DNSClass::IN,
            data: DNSRecordData::A(ipv4),
        }
    }

    pub fn ptr(reverse_name: String, target: &str) -> Self {
        DNSRecord {
            name: reverse_name,
            class: DNSClass::IN,
            data: DNSRecordData::PTR(with_trailing_dot(target)),
        }
    }
}

impl Display for DNSRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.name, self.class, self.data.type_str(), self.data)
    }
}
