pub mod cli;
pub mod error;
pub mod formatter;
pub mod io;
pub mod model;
pub mod parser;
pub mod task;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Source JSON file listing the hosts.
    pub source: String,
    /// Directory the zone files are written to.
    pub dest_dir: String,

    pub forward_zones: Vec<String>,
    /// IPv4 prefixes must be /24, IPv6 prefixes /32, /40 or /48.
    pub reverse_zones: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            source: "input.json".to_string(),
            dest_dir: "./output".to_string(),
            forward_zones: vec!["zone1.example.".to_string(), "zone2.example".to_string()],
            reverse_zones: vec!["192.0.2.0/24".to_string(), "2001:db8::/32".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"dest_dir": "/var/lib/zones"}"#).unwrap();

        assert_eq!(config.dest_dir, "/var/lib/zones");
        assert_eq!(config.source, "input.json");
        assert_eq!(config.reverse_zones, vec!["192.0.2.0/24", "2001:db8::/32"]);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();

        assert_eq!(serde_json::from_str::<AppConfig>(&json).unwrap(), config);
    }
}
