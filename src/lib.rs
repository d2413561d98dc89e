pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

use crate::application::categories::CategoriesUseCase;
use crate::application::combined_view::CombinedViewUseCase;
use crate::application::histogram::HistogramUseCase;
use crate::application::list_transactions::ListTransactionsUseCase;
use crate::application::seed::SeedImportUseCase;
use crate::application::statistics::StatisticsUseCase;
use crate::config::Config;
use crate::domain::error::DomainError;
use crate::domain::ports::seed_source::SeedSource;
use crate::domain::ports::transaction_repository::TransactionRepository;
use crate::domain::values::query::{QueryDefaults, TransactionQuery};
use crate::domain::views::{
    CategoryCounts, CombinedView, Histogram, PagedResult, SeedReport, Statistics,
};
use crate::infrastructure::seed::http::HttpSeedSource;
use crate::infrastructure::sqlite::transaction_repo::SqliteTransactionRepo;
use std::sync::Arc;

/// Entry point to the query operations. Every method validates its
/// parameters before the store is touched.
pub struct Salescope {
    defaults: QueryDefaults,
    list_uc: ListTransactionsUseCase,
    statistics_uc: StatisticsUseCase,
    histogram_uc: HistogramUseCase,
    categories_uc: CategoriesUseCase,
    combined_uc: CombinedViewUseCase,
    seed_uc: SeedImportUseCase,
    seed_source: Option<Arc<dyn SeedSource>>,
}

impl Salescope {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let repo = SqliteTransactionRepo::open(&config.db_path)?;
        let seed = HttpSeedSource::new(config.seed_url.clone())?;
        Ok(Self::with_repository(Arc::new(repo), config.defaults)
            .with_seed_source(Arc::new(seed)))
    }

    pub fn with_repository(repo: Arc<dyn TransactionRepository>, defaults: QueryDefaults) -> Self {
        Self {
            defaults,
            list_uc: ListTransactionsUseCase::new(repo.clone()),
            statistics_uc: StatisticsUseCase::new(repo.clone()),
            histogram_uc: HistogramUseCase::new(repo.clone()),
            categories_uc: CategoriesUseCase::new(repo.clone()),
            combined_uc: CombinedViewUseCase::new(repo.clone()),
            seed_uc: SeedImportUseCase::new(repo),
            seed_source: None,
        }
    }

    /// Source used by [`Salescope::initialize`].
    pub fn with_seed_source(mut self, source: Arc<dyn SeedSource>) -> Self {
        self.seed_source = Some(source);
        self
    }

    pub fn defaults(&self) -> &QueryDefaults {
        &self.defaults
    }

    pub async fn list_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<PagedResult, DomainError> {
        let listing = query.listing(&self.defaults)?;
        self.list_uc.execute(&listing).await
    }

    pub async fn statistics(&self, query: &TransactionQuery) -> Result<Statistics, DomainError> {
        let month = query.required_month()?;
        self.statistics_uc.execute(month).await
    }

    pub async fn histogram(&self, query: &TransactionQuery) -> Result<Histogram, DomainError> {
        let month = query.required_month()?;
        self.histogram_uc.execute(month).await
    }

    pub async fn category_counts(
        &self,
        query: &TransactionQuery,
    ) -> Result<CategoryCounts, DomainError> {
        let month = query.required_month()?;
        self.categories_uc.execute(month).await
    }

    pub async fn combined_view(
        &self,
        query: &TransactionQuery,
    ) -> Result<CombinedView, DomainError> {
        self.combined_uc.execute(query, &self.defaults).await
    }

    pub async fn import_seed(&self, source: &dyn SeedSource) -> Result<SeedReport, DomainError> {
        self.seed_uc.execute(source).await
    }

    /// Imports from the configured seed source. Safe to repeat.
    pub async fn initialize(&self) -> Result<SeedReport, DomainError> {
        let source = self
            .seed_source
            .as_deref()
            .ok_or_else(|| DomainError::Config("no seed source configured".into()))?;
        self.seed_uc.execute(source).await
    }
}
