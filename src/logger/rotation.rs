//! Size-based rotation with numbered backups

use std::fs;
use std::path::{Path, PathBuf};

use crate::logger::config::RotationConfig;
use crate::logger::error::LoggerError;

/// Decides when the active log file is rotated and shifts the backups.
pub struct RotationManager {
    config: RotationConfig,
}

impl RotationManager {
    pub fn new(config: RotationConfig) -> Self {
        Self { config }
    }

    pub fn should_rotate(&self, current_file_size: u64) -> bool {
        current_file_size >= self.config.max_size
    }

    /// Moves `app.log` to `app.log.1`, `app.log.1` to `app.log.2` and so on,
    /// dropping whatever would land past `max_files`.
    pub fn rotate(&self, current_path: &Path) -> Result<(), LoggerError> {
        let oldest = backup_path(current_path, self.config.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.config.max_files).rev() {
            let from = backup_path(current_path, index);
            if from.exists() {
                fs::rename(&from, backup_path(current_path, index + 1))?;
            }
        }

        if current_path.exists() {
            fs::rename(current_path, backup_path(current_path, 1)).map_err(|e| {
                LoggerError::rotation(format!(
                    "Failed to rotate {}: {}",
                    current_path.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}

pub fn backup_path(base_path: &Path, index: usize) -> PathBuf {
    let mut name = base_path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}
