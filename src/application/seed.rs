use crate::domain::entities::transaction::Transaction;
use crate::domain::error::DomainError;
use crate::domain::ports::seed_source::SeedSource;
use crate::domain::ports::transaction_repository::TransactionRepository;
use crate::domain::views::SeedReport;
use std::sync::Arc;

/// One-time bulk load of the store from a seed source.
///
/// Records that fail validation are skipped. Ids already present are left
/// untouched, so running the import twice inserts nothing the second time.
pub struct SeedImportUseCase {
    repo: Arc<dyn TransactionRepository>,
}

impl SeedImportUseCase {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, source: &dyn SeedSource) -> Result<SeedReport, DomainError> {
        tracing::info!(source = source.name(), "fetching seed data");
        let records = source.fetch().await?;
        let fetched = records.len();

        let mut transactions = Vec::with_capacity(fetched);
        let mut rejected = 0;
        for record in records {
            match Transaction::try_from(record) {
                Ok(tx) => transactions.push(tx),
                Err(reason) => {
                    tracing::warn!("skipping seed record: {reason}");
                    rejected += 1;
                }
            }
        }

        let inserted = self.repo.insert_many(&transactions).await?;
        let report = SeedReport {
            fetched,
            inserted,
            skipped: fetched - inserted,
        };
        tracing::info!(
            fetched = report.fetched,
            inserted = report.inserted,
            rejected,
            "seed import finished"
        );
        Ok(report)
    }
}
