use std::collections::HashSet;
use std::path::PathBuf;

use tracing::warn;

use super::StoreError;

/// Store for the subscriber list file
///
/// The file is a JSON array of channel ids. A missing file and a corrupt
/// file both read as an empty set, so a bad file never bricks the bot.
#[derive(Clone, Debug)]
pub struct SubscriberStore {
    path: PathBuf,
}

impl SubscriberStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the subscriber set
    pub fn load(&self) -> Result<HashSet<u64>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<u64>>(&contents) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(e) => {
                warn!("Subscriber file {:?} is corrupt ({}), treating as empty", self.path, e);
                Ok(HashSet::new())
            }
        }
    }

    /// Add a subscriber, persisting the full set when the id is new
    ///
    /// Returns whether the id was newly added.
    pub fn add(&self, id: u64) -> Result<bool, StoreError> {
        let mut subscribers = self.load()?;
        if !subscribers.insert(id) {
            return Ok(false);
        }
        self.save(&subscribers)?;
        Ok(true)
    }

    fn save(&self, subscribers: &HashSet<u64>) -> Result<(), StoreError> {
        // Sorted for a stable file
        let mut ids: Vec<u64> = subscribers.iter().copied().collect();
        ids.sort_unstable();
        std::fs::write(&self.path, serde_json::to_string(&ids)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "timetable_rs_subscribers_{}_{}",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let store = SubscriberStore::new(temp_path("missing.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let path = temp_path("corrupt.json");
        std::fs::write(&path, "{not a list").unwrap();

        let store = SubscriberStore::new(&path);
        assert!(store.load().unwrap().is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_add_persists_new_subscriber() {
        let path = temp_path("add.json");
        let _ = std::fs::remove_file(&path);

        let store = SubscriberStore::new(&path);
        assert!(store.add(42).unwrap());
        assert!(store.add(7).unwrap());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, HashSet::from([7, 42]));
        // Stable on-disk order
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[7,42]");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_add_existing_subscriber_is_noop() {
        let path = temp_path("noop.json");
        let _ = std::fs::remove_file(&path);

        let store = SubscriberStore::new(&path);
        assert!(store.add(42).unwrap());
        assert!(!store.add(42).unwrap());
        assert_eq!(store.load().unwrap().len(), 1);

        std::fs::remove_file(&path).unwrap();
    }
}
