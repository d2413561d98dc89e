use crate::domain::error::DomainError;
use crate::domain::ports::seed_source::{SeedRecord, SeedSource};
use async_trait::async_trait;

/// Downloads the seed JSON array over HTTP.
pub struct HttpSeedSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent("Salescope/0.1")
            .build()
            .map_err(|e| DomainError::Import(format!("could not build HTTP client: {e}")))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<SeedRecord>, DomainError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::Import(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Import(format!(
                "{} returned {}",
                self.url,
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| DomainError::Import(format!("could not parse seed data: {e}")))
    }
}
