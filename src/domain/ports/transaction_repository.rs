use crate::domain::entities::transaction::Transaction;
use crate::domain::error::DomainError;
use crate::domain::values::month::Month;
use crate::domain::values::price_range::PriceRange;
use crate::domain::values::search::SearchTerm;
use crate::domain::views::{CategoryCounts, Statistics};
use async_trait::async_trait;

/// Predicate over transactions. Every part that is set must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub month: Option<Month>,
    pub search: Option<SearchTerm>,
    pub sold: Option<bool>,
    pub price_range: Option<PriceRange>,
}

impl TransactionFilter {
    pub fn for_month(month: Month) -> Self {
        Self {
            month: Some(month),
            ..Default::default()
        }
    }

    /// Blank search terms are dropped so they never narrow the result.
    pub fn with_search(mut self, search: SearchTerm) -> Self {
        self.search = (!search.is_empty()).then_some(search);
        self
    }

    pub fn with_sold(mut self, sold: bool) -> Self {
        self.sold = Some(sold);
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.month.map_or(true, |m| m.contains(&tx.date_of_sale))
            && self.search.as_ref().map_or(true, |s| s.matches(tx))
            && self.sold.map_or(true, |sold| tx.sold == sold)
            && self.price_range.map_or(true, |r| r.contains(tx.price))
    }
}

/// Read access to the transaction store, plus the one bulk load used for
/// seeding. `find` returns records in insertion order.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn count(&self, filter: &TransactionFilter) -> Result<u64, DomainError>;
    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, DomainError>;
    /// Price total plus sold and unsold counts, read in one pass so all
    /// three describe the same snapshot.
    async fn sale_totals(&self, filter: &TransactionFilter) -> Result<Statistics, DomainError>;
    async fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<CategoryCounts, DomainError>;
    /// Inserts records whose id is not already stored; returns how many were new.
    async fn insert_many(&self, transactions: &[Transaction]) -> Result<usize, DomainError>;
}
