use crate::domain::entities::transaction::Transaction;
use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::*;
use crate::domain::views::{CategoryCounts, Statistics};
use async_trait::async_trait;
use std::sync::RwLock;

/// Keeps transactions in a `Vec`, evaluating filters in Rust.
#[derive(Default)]
pub struct MemoryTransactionRepo {
    rows: RwLock<Vec<Transaction>>,
}

impl MemoryTransactionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&[Transaction]) -> T) -> Result<T, DomainError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(f(&rows))
    }
}

#[async_trait]
impl TransactionRepository for MemoryTransactionRepo {
    async fn count(&self, filter: &TransactionFilter) -> Result<u64, DomainError> {
        self.read(|rows| rows.iter().filter(|tx| filter.matches(tx)).count() as u64)
    }

    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, DomainError> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        self.read(|rows| {
            rows.iter()
                .filter(|tx| filter.matches(tx))
                .skip(skip)
                .take(limit)
                .cloned()
                .collect()
        })
    }

    async fn sale_totals(&self, filter: &TransactionFilter) -> Result<Statistics, DomainError> {
        self.read(|rows| {
            rows.iter()
                .filter(|tx| filter.matches(tx))
                .fold(Statistics::default(), |mut stats, tx| {
                    stats.total_amount += tx.price;
                    if tx.sold {
                        stats.sold_count += 1;
                    } else {
                        stats.not_sold_count += 1;
                    }
                    stats
                })
        })
    }

    async fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<CategoryCounts, DomainError> {
        self.read(|rows| {
            let mut counts = CategoryCounts::new();
            for tx in rows.iter().filter(|tx| filter.matches(tx)) {
                *counts.entry(tx.category.clone()).or_default() += 1;
            }
            counts
        })
    }

    async fn insert_many(&self, transactions: &[Transaction]) -> Result<usize, DomainError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut inserted = 0;
        for tx in transactions {
            if rows.iter().any(|existing| existing.id == tx.id) {
                continue;
            }
            rows.push(tx.clone());
            inserted += 1;
        }
        Ok(inserted)
    }
}
