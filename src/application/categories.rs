use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::{TransactionFilter, TransactionRepository};
use crate::domain::values::month::Month;
use crate::domain::views::CategoryCounts;
use std::sync::Arc;

#[derive(Clone)]
pub struct CategoriesUseCase {
    repo: Arc<dyn TransactionRepository>,
}

impl CategoriesUseCase {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, month: Month) -> Result<CategoryCounts, DomainError> {
        self.repo
            .count_by_category(&TransactionFilter::for_month(month))
            .await
    }
}
