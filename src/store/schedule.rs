use std::collections::HashMap;
use std::path::PathBuf;

use super::StoreError;

/// Read-only store for the weekly schedule file
///
/// The file is a JSON object mapping weekday display names ("Monday" ..
/// "Sunday") to a raw comma-separated text blob. It is re-read on every
/// load so edits are picked up without a restart.
#[derive(Clone, Debug)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full weekday -> raw text mapping
    pub fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Raw schedule text for a single weekday, `None` if the key is absent
    pub fn entries_for(&self, day: &str) -> Result<Option<String>, StoreError> {
        let mut schedule = self.load()?;
        Ok(schedule.remove(day))
    }
}
