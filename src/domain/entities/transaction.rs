use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single product sale record. Read-only to everything in this crate
/// except the seed importer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        title: String,
        description: String,
        price: f64,
        category: String,
        sold: bool,
        date_of_sale: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description,
            price,
            category,
            image: None,
            sold,
            date_of_sale,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}
