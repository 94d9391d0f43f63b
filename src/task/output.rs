use crate::task::Task;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Makes sure the destination directory exists before any zone file is written.
pub struct PrepareDestDirTask {
    dest_dir: PathBuf,
}

impl PrepareDestDirTask {
    pub fn new(dest_dir: PathBuf) -> Self {
        Self { dest_dir }
    }
}

impl Task for PrepareDestDirTask {
    fn name(&self) -> &str {
        "Prepare destination directory"
    }

    fn run(&self) -> anyhow::Result<()> {
        if self.dest_dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(&self.dest_dir)
            .with_context(|| format!("Failed to create destination directory {:?}", self.dest_dir))?;

        info!("Created destination directory {:?}", self.dest_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let dest_dir = temp.path().join("a").join("b");

        PrepareDestDirTask::new(dest_dir.clone()).run().unwrap();

        assert!(dest_dir.is_dir());
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let temp = TempDir::new().unwrap();

        assert!(PrepareDestDirTask::new(temp.path().to_path_buf()).run().is_ok());
    }

    #[test]
    fn test_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "").unwrap();

        let err = PrepareDestDirTask::new(file).run().unwrap_err();

        assert!(format!("{:#}", err).contains("occupied"));
    }
}
