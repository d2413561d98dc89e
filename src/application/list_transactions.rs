use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::{TransactionFilter, TransactionRepository};
use crate::domain::values::query::ListingQuery;
use crate::domain::views::PagedResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct ListTransactionsUseCase {
    repo: Arc<dyn TransactionRepository>,
}

impl ListTransactionsUseCase {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: &ListingQuery) -> Result<PagedResult, DomainError> {
        let filter = TransactionFilter::for_month(query.month).with_search(query.search.clone());

        let total = self.repo.count(&filter).await?;
        let offset = query.page.offset();
        // Past the last page: nothing to fetch, total still reported.
        let items = if offset >= total {
            Vec::new()
        } else {
            self.repo
                .find(&filter, offset, query.page.per_page())
                .await?
        };

        tracing::debug!(
            month = query.month.number(),
            search = query.search.text(),
            page = query.page.page(),
            total,
            returned = items.len(),
            "listed transactions"
        );
        Ok(PagedResult { total, items })
    }
}
