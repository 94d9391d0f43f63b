use crate::formatter::dns_zone::format_zone;
use crate::io::write_zone_file;
use crate::model::dns::{Host, Zone};
use crate::task::Task;
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Generates one zone and writes it to its own file.
pub struct GenerateZoneFileTask {
    name: String,
    zone: Zone,
    hosts: Arc<[Host]>,
    dest_dir: PathBuf,
}

impl GenerateZoneFileTask {
    pub fn new(zone: Zone, hosts: Arc<[Host]>, dest_dir: PathBuf) -> Self {
        Self {
            name: format!("Generate {} zone {}", zone.kind(), zone),
            zone,
            hosts,
            dest_dir,
        }
    }
}

impl Task for GenerateZoneFileTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self) -> anyhow::Result<()> {
        let output = format_zone(&self.zone, &self.hosts)
            .with_context(|| format!("Failed to generate {} zone text for {}", self.zone.kind(), self.zone))?;

        let zone_file_path = write_zone_file(&output.zone_text, &self.dest_dir, &output.zone_file_name)
            .with_context(|| format!("Failed to write {} zone file for {}", self.zone.kind(), self.zone))?;

        info!(
            "{} zone file generated: zone={}, file={:?}, records={}",
            self.zone.kind(),
            self.zone,
            zone_file_path,
            output.record_count
        );

        Ok(())
    }
}
