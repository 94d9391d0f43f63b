use crate::AppConfig;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[command(
    name = "dns-zone-generator",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate forward and reverse DNS zone files from a JSON host list",
    after_help = "example:\n  dns-zone-generator --dest-dir ./dest --forward-zones zone1.example --reverse-zones 192.0.2.0/24 --reverse-zones 2001:db8::/32 --source hosts.json"
)]
pub struct CommandArgs {
    /// JSON configuration file. Command-line values take precedence over it
    #[arg(short, long, env = "DNS_ZONE_GENERATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the default configuration to the configuration path and exit
    #[arg(long, default_value_t = false)]
    pub init_config: bool,

    /// Input JSON file listing the hosts
    #[arg(short, long, env = "DNS_ZONE_GENERATOR_SOURCE")]
    pub source: Option<String>,

    /// Output directory for the zone files
    #[arg(short, long = "dest-dir", env = "DNS_ZONE_GENERATOR_DEST_DIR")]
    pub dest_dir: Option<String>,

    /// Forward zone(s), e.g. 'zone1.example.'
    #[arg(short, long = "forward-zones", value_delimiter = ',', env = "DNS_ZONE_GENERATOR_FORWARD_ZONES")]
    pub forward_zones: Vec<String>,

    /// Reverse zone(s). Limitation: IPv4 prefix size must be /24, IPv6 prefix size must be /32, /40 or /48
    #[arg(short, long = "reverse-zones", value_delimiter = ',', env = "DNS_ZONE_GENERATOR_REVERSE_ZONES")]
    pub reverse_zones: Vec<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info", env = "DNS_ZONE_GENERATOR_LOG_LEVEL")]
    pub log_level: String,
}

impl CommandArgs {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Overlays the values given on the command line onto `config`.
    ///
    /// A zone list given here replaces the configured one.
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(source) = &self.source {
            config.source = source.clone();
        }

        if let Some(dest_dir) = &self.dest_dir {
            config.dest_dir = dest_dir.clone();
        }

        if !self.forward_zones.is_empty() {
            config.forward_zones = self.forward_zones.clone();
        }

        if !self.reverse_zones.is_empty() {
            config.reverse_zones = self.reverse_zones.clone();
        }

        config
    }
}
