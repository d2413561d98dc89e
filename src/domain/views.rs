//! Derived, never-persisted results returned by the query operations.

use crate::domain::entities::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult {
    /// Matching records across all pages.
    pub total: u64,
    pub items: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_amount: f64,
    pub sold_count: u64,
    pub not_sold_count: u64,
}

impl Statistics {
    pub fn record_count(&self) -> u64 {
        self.sold_count + self.not_sold_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBucket {
    pub range_label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    pub buckets: Vec<HistogramBucket>,
}

impl Histogram {
    pub fn count_for(&self, label: &str) -> Option<u64> {
        self.buckets
            .iter()
            .find(|b| b.range_label == label)
            .map(|b| b.count)
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

pub type CategoryCounts = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedView {
    pub listing: PagedResult,
    pub statistics: Statistics,
    pub histogram: Histogram,
    pub categories: CategoryCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub fetched: usize,
    pub inserted: usize,
    pub skipped: usize,
}
