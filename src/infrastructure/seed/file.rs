use crate::domain::error::DomainError;
use crate::domain::ports::seed_source::{SeedRecord, SeedSource};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the seed JSON array from a local file.
pub struct FileSeedSource {
    path: PathBuf,
    name: String,
}

impl FileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
        }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<SeedRecord>, DomainError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DomainError::Import(format!("{}: {e}", self.name)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::Import(format!("{}: {e}", self.name)))
    }
}
