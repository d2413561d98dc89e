use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::{TransactionFilter, TransactionRepository};
use crate::domain::values::month::Month;
use crate::domain::values::price_range::PRICE_BUCKETS;
use crate::domain::views::{Histogram, HistogramBucket};
use std::sync::Arc;

#[derive(Clone)]
pub struct HistogramUseCase {
    repo: Arc<dyn TransactionRepository>,
}

impl HistogramUseCase {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    /// One count per fixed price bucket, in bucket order, zeros included.
    pub async fn execute(&self, month: Month) -> Result<Histogram, DomainError> {
        let month_filter = TransactionFilter::for_month(month);
        let mut buckets = Vec::with_capacity(PRICE_BUCKETS.len());

        for bucket in &PRICE_BUCKETS {
            let filter = month_filter.clone().with_price_range(bucket.range());
            buckets.push(HistogramBucket {
                range_label: bucket.label(),
                count: self.repo.count(&filter).await?,
            });
        }

        Ok(Histogram { buckets })
    }
}
