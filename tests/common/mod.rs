//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use salescope::domain::entities::transaction::Transaction;
use salescope::domain::error::DomainError;
use salescope::domain::ports::transaction_repository::{TransactionFilter, TransactionRepository};
use salescope::domain::values::query::QueryDefaults;
use salescope::domain::views::{CategoryCounts, Statistics};
use salescope::infrastructure::memory::transaction_repo::MemoryTransactionRepo;
use salescope::infrastructure::sqlite::transaction_repo::SqliteTransactionRepo;
use salescope::Salescope;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const CATEGORIES: [&str; 4] = ["electronics", "jewelery", "men's clothing", "women's clothing"];

pub fn sqlite_repo() -> Arc<dyn TransactionRepository> {
    Arc::new(SqliteTransactionRepo::open(":memory:").unwrap())
}

pub fn memory_repo() -> Arc<dyn TransactionRepository> {
    Arc::new(MemoryTransactionRepo::new())
}

pub async fn setup_with(repo: Arc<dyn TransactionRepository>, txs: &[Transaction]) -> Salescope {
    repo.insert_many(txs).await.unwrap();
    Salescope::with_repository(repo, QueryDefaults::default())
}

pub async fn setup(txs: &[Transaction]) -> Salescope {
    setup_with(sqlite_repo(), txs).await
}

pub fn sale(
    title: &str,
    price: f64,
    category: &str,
    sold: bool,
    (year, month, day): (i32, u32, u32),
) -> Transaction {
    Transaction::new(
        title.to_string(),
        format!("{title} description"),
        price,
        category.to_string(),
        sold,
        Utc.with_ymd_and_hms(year, month, day, 10, 30, 0).unwrap(),
    )
}

/// 144 records spread over every month, three years, four categories and
/// the full price range, including the exact bucket boundaries.
pub fn catalogue() -> Vec<Transaction> {
    (0..144u32)
        .map(|i| {
            let month = i % 12 + 1;
            let year = 2020 + (i % 3) as i32;
            let price = match i % 9 {
                0 => 100.0,
                1 => 200.0,
                2 => 900.0,
                3 => 0.0,
                _ => f64::from(i * 37 % 1100) + 0.5,
            };
            sale(
                &format!("Item {i}"),
                price,
                CATEGORIES[(i % 4) as usize],
                i % 3 == 0,
                (year, month, 1 + i % 28),
            )
        })
        .collect()
}

/// Which repository calls should fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailOn {
    /// Counts restricted to a price range, i.e. the histogram.
    PriceRangeCount,
    Everything,
}

/// Wraps a repository, failing selected calls and optionally stalling `find`.
/// Every read call is counted.
pub struct FailingRepo {
    pub inner: Arc<dyn TransactionRepository>,
    pub fail_on: FailOn,
    pub find_delay: Option<Duration>,
    pub reads: AtomicUsize,
}

impl FailingRepo {
    pub fn new(inner: Arc<dyn TransactionRepository>, fail_on: FailOn) -> Self {
        Self {
            inner,
            fail_on,
            find_delay: None,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn unavailable() -> DomainError {
        DomainError::StoreUnavailable("connection refused".into())
    }
}

#[async_trait]
impl TransactionRepository for FailingRepo {
    async fn count(&self, filter: &TransactionFilter) -> Result<u64, DomainError> {
        self.record_read();
        let fail = match self.fail_on {
            FailOn::PriceRangeCount => filter.price_range.is_some(),
            FailOn::Everything => true,
        };
        if fail {
            return Err(Self::unavailable());
        }
        self.inner.count(filter).await
    }

    async fn find(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, DomainError> {
        self.record_read();
        if let Some(delay) = self.find_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_on == FailOn::Everything {
            return Err(Self::unavailable());
        }
        self.inner.find(filter, skip, limit).await
    }

    async fn sale_totals(&self, filter: &TransactionFilter) -> Result<Statistics, DomainError> {
        self.record_read();
        if self.fail_on == FailOn::Everything {
            return Err(Self::unavailable());
        }
        self.inner.sale_totals(filter).await
    }

    async fn count_by_category(
        &self,
        filter: &TransactionFilter,
    ) -> Result<CategoryCounts, DomainError> {
        self.record_read();
        if self.fail_on == FailOn::Everything {
            return Err(Self::unavailable());
        }
        self.inner.count_by_category(filter).await
    }

    async fn insert_many(&self, transactions: &[Transaction]) -> Result<usize, DomainError> {
        self.inner.insert_many(transactions).await
    }
}
