use serde::{Deserialize, Serialize};

/// The source document: `{"hosts": [...]}`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceJson {
    #[serde(default)]
    pub hosts: Vec<HostJson>,
}

/// A host as written in the source file.
///
/// `name` is a domain name with or without the trailing dot, e.g. `host1.zone1.example.` or
/// `host2.zone2.example`. An empty or missing address means the host has no address of that family.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HostJson {
    pub name: String,
    pub ipv4_addr: String,
    pub ipv6_addr: String,
}
