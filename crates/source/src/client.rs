use crate::states::parse_states;
use card_core::{CardError, Result, StateTable};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads entity states from a JSON document on disk.
///
/// The file is expected to be refreshed by an exporter (a REST poll of the
/// home-automation host, an automation writing a template, ...). Each
/// [`fetch`](Self::fetch) reads it anew.
#[derive(Debug, Clone)]
pub struct StatesFile {
    path: PathBuf,
}

impl StatesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the current states.
    pub async fn fetch(&self) -> Result<StateTable> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CardError::Source(format!("read '{}': {e}", self.path.display())))?;

        let table = parse_states(&raw)?;
        debug!("Fetched {} entity states from '{}'", table.len(), self.path.display());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_core::StateLookup;

    #[tokio::test]
    async fn fetch_reads_current_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        std::fs::write(&path, r#"[{"entity_id": "sensor.soc", "state": "42"}]"#).unwrap();

        let file = StatesFile::new(&path);
        assert_eq!(file.fetch().await.unwrap().numeric_state("sensor.soc"), Some(42.0));

        std::fs::write(&path, r#"[{"entity_id": "sensor.soc", "state": "43"}]"#).unwrap();
        assert_eq!(file.fetch().await.unwrap().numeric_state("sensor.soc"), Some(43.0));
    }

    #[tokio::test]
    async fn fetch_missing_file_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = StatesFile::new(dir.path().join("missing.json"));
        assert!(matches!(file.fetch().await, Err(CardError::Source(_))));
    }
}
