use crate::domain::entities::transaction::Transaction;
use crate::domain::error::DomainError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Somewhere the initial product-transaction records can be loaded from.
#[async_trait]
pub trait SeedSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<SeedRecord>, DomainError>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeedId {
    Number(u64),
    Text(String),
}

/// One record of the seed JSON document, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    #[serde(default)]
    pub id: Option<SeedId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sold: bool,
    pub date_of_sale: String,
}

impl TryFrom<SeedRecord> for Transaction {
    type Error = String;

    fn try_from(record: SeedRecord) -> Result<Self, Self::Error> {
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(format!(
                "'{}' has invalid price {}",
                record.title, record.price
            ));
        }
        let date_of_sale = DateTime::parse_from_rfc3339(&record.date_of_sale)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                format!(
                    "'{}' has invalid dateOfSale '{}': {e}",
                    record.title, record.date_of_sale
                )
            })?;

        let tx = Transaction::new(
            record.title,
            record.description,
            record.price,
            record.category,
            record.sold,
            date_of_sale,
        )
        .with_image(record.image);

        Ok(match record.id {
            Some(SeedId::Number(n)) => tx.with_id(n.to_string()),
            Some(SeedId::Text(s)) if !s.trim().is_empty() => tx.with_id(s),
            _ => tx,
        })
    }
}
