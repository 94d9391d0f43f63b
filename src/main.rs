use clap::Parser;
use dns_zone_generator::cli::CommandArgs;
use dns_zone_generator::io::{generate_zone_files, load_config, write_default_config};
use dns_zone_generator::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn init_app_config(args: &CommandArgs) -> anyhow::Result<AppConfig> {
    let app_config = match &args.config {
        Some(config_path) => {
            let config = load_config(config_path)?;

            info!("Loaded configuration from {:?}", config_path);

            config
        }
        None => AppConfig::default(),
    };

    Ok(args.apply_to(app_config))
}

fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    init_tracing(&args.log_level);

    if args.init_config {
        return write_default_config(&args.config_path());
    }

    let app_config = init_app_config(&args)?;

    generate_zone_files(&app_config)
}
