use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Request parameters were rejected before touching the store.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The record store could not be reached or the query failed.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// One sub-query of a combined view failed.
    #[error("Aggregation '{view}' failed: {source}")]
    Aggregation {
        view: &'static str,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Import error: {0}")]
    Import(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn aggregation(view: &'static str) -> impl FnOnce(DomainError) -> DomainError {
        move |source| DomainError::Aggregation {
            view,
            source: Box::new(source),
        }
    }

    /// The innermost error, unwrapping any aggregation layers.
    pub fn root_cause(&self) -> &DomainError {
        match self {
            DomainError::Aggregation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::StoreUnavailable(e.to_string())
    }
}
