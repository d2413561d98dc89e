use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::{TransactionFilter, TransactionRepository};
use crate::domain::values::month::Month;
use crate::domain::views::Statistics;
use std::sync::Arc;

/// Revenue and sold/unsold counts for one month.
///
/// `total_amount` sums every month-matching record, sold or not. The two
/// counts partition the same month-matching set; the store reads all three
/// in a single query.
#[derive(Clone)]
pub struct StatisticsUseCase {
    repo: Arc<dyn TransactionRepository>,
}

impl StatisticsUseCase {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, month: Month) -> Result<Statistics, DomainError> {
        self.repo
            .sale_totals(&TransactionFilter::for_month(month))
            .await
    }
}
