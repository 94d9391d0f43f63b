use crate::model::dns::Host;
use crate::model::source::SourceJson;
use crate::parser::{get_parsed_hosts, get_parsed_zones};
use crate::task::dns::GenerateZoneFileTask;
use crate::task::output::PrepareDestDirTask;
use crate::task::Task;
use crate::AppConfig;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read configuration file {:?}", config_path))?;

    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse configuration file {:?}", config_path))?;

    Ok(config)
}

pub fn write_default_config(config_path: &Path) -> anyhow::Result<()> {
    let config_json = serde_json::to_string_pretty(&AppConfig::default())?;

    fs::write(config_path, config_json)
        .with_context(|| format!("Failed to write default configuration to {:?}", config_path))?;

    info!("Wrote default configuration to {:?}", config_path);

    Ok(())
}

pub fn load_source(source_path: &Path) -> anyhow::Result<Vec<Host>> {
    let content = fs::read_to_string(source_path)
        .with_context(|| format!("Failed to open source file {:?}", source_path))?;

    let source: SourceJson = serde_json::from_str(&content)
        .with_context(|| format!("Failed to unmarshal source from {:?}", source_path))?;

    let hosts = get_parsed_hosts(&source)
        .with_context(|| format!("Invalid host record in {:?}", source_path))?;

    Ok(hosts)
}

pub fn write_zone_file(zone_text: &str, dest_dir: &Path, zone_file_name: &str) -> anyhow::Result<PathBuf> {
    let zone_file_path = dest_dir.join(zone_file_name);

    fs::write(&zone_file_path, zone_text)
        .with_context(|| format!("Failed to write zone file {:?}", zone_file_path))?;

    Ok(zone_file_path)
}

/// Validates the configuration, loads the hosts and writes one file per zone.
///
/// Stops at the first failing zone; files already written for earlier zones are left in place.
pub fn generate_zone_files(config: &AppConfig) -> anyhow::Result<()> {
    let zones = get_parsed_zones(&config.forward_zones, &config.reverse_zones)?;

    let source_path = Path::new(&config.source);
    let hosts: Arc<[Host]> = Arc::from(load_source(source_path)?);

    info!("Loaded {} hosts from {:?}", hosts.len(), source_path);

    let dest_dir = PathBuf::from(&config.dest_dir);

    let mut tasks: Vec<Box<dyn Task>> = vec![Box::new(PrepareDestDirTask::new(dest_dir.clone()))];

    for zone in zones {
        tasks.push(Box::new(GenerateZoneFileTask::new(zone, hosts.clone(), dest_dir.clone())));
    }

    for task in &tasks {
        info!("Running task: {}", task.name());

        task.run()
            .with_context(|| format!("Error running task '{}'", task.name()))?;
    }

    info!("Generated {} zone files in {:?}", tasks.len() - 1, dest_dir);

    Ok(())
}
