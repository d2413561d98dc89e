use crate::application::categories::CategoriesUseCase;
use crate::application::histogram::HistogramUseCase;
use crate::application::list_transactions::ListTransactionsUseCase;
use crate::application::statistics::StatisticsUseCase;
use crate::domain::error::DomainError;
use crate::domain::ports::transaction_repository::TransactionRepository;
use crate::domain::values::query::{QueryDefaults, TransactionQuery};
use crate::domain::views::CombinedView;
use std::sync::Arc;

/// Runs the listing and the three monthly aggregations concurrently and
/// joins them into one payload.
///
/// The first failing sub-query fails the whole view; the others are
/// dropped mid-flight and nothing partial is returned.
#[derive(Clone)]
pub struct CombinedViewUseCase {
    listing: ListTransactionsUseCase,
    statistics: StatisticsUseCase,
    histogram: HistogramUseCase,
    categories: CategoriesUseCase,
}

impl CombinedViewUseCase {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self {
            listing: ListTransactionsUseCase::new(repo.clone()),
            statistics: StatisticsUseCase::new(repo.clone()),
            histogram: HistogramUseCase::new(repo.clone()),
            categories: CategoriesUseCase::new(repo),
        }
    }

    pub async fn execute(
        &self,
        query: &TransactionQuery,
        defaults: &QueryDefaults,
    ) -> Result<CombinedView, DomainError> {
        // Validate everything before the first store call.
        let month = query.required_month()?;
        let listing_query = query.listing(defaults)?;

        let (listing, statistics, histogram, categories) = tokio::try_join!(
            async {
                self.listing
                    .execute(&listing_query)
                    .await
                    .map_err(DomainError::aggregation("listing"))
            },
            async {
                self.statistics
                    .execute(month)
                    .await
                    .map_err(DomainError::aggregation("statistics"))
            },
            async {
                self.histogram
                    .execute(month)
                    .await
                    .map_err(DomainError::aggregation("histogram"))
            },
            async {
                self.categories
                    .execute(month)
                    .await
                    .map_err(DomainError::aggregation("categories"))
            },
        )
        .inspect_err(|e| tracing::warn!(month = month.number(), "combined view failed: {e}"))?;

        Ok(CombinedView {
            listing,
            statistics,
            histogram,
            categories,
        })
    }
}
