use crate::domain::error::DomainError;
use crate::domain::values::month::Month;
use crate::domain::values::page::{PageRequest, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::domain::values::search::SearchTerm;
use serde::Deserialize;

/// Raw request parameters as they arrive from HTTP or the CLI.
///
/// Numbers are kept signed so that out-of-range values surface as
/// validation errors instead of parse failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub month: Option<i64>,
    pub search: Option<String>,
    pub page: Option<i64>,
    #[serde(alias = "per_page")]
    pub per_page: Option<i64>,
}

/// Fallbacks for parameters a listing request may omit.
#[derive(Debug, Clone, Copy)]
pub struct QueryDefaults {
    pub month: Month,
    pub per_page: u64,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            month: Month::MARCH,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Validated listing parameters.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub month: Month,
    pub search: SearchTerm,
    pub page: PageRequest,
}

impl TransactionQuery {
    pub fn for_month(month: i64) -> Self {
        Self {
            month: Some(month),
            ..Default::default()
        }
    }

    /// Month for the aggregation views, which have no default.
    pub fn required_month(&self) -> Result<Month, DomainError> {
        match self.month {
            Some(m) => Month::new(m),
            None => Err(DomainError::Validation("month is required".into())),
        }
    }

    pub fn listing(&self, defaults: &QueryDefaults) -> Result<ListingQuery, DomainError> {
        let month = match self.month {
            Some(m) => Month::new(m)?,
            None => defaults.month,
        };
        let page = PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE as i64),
            self.per_page
                .unwrap_or(i64::try_from(defaults.per_page).unwrap_or(i64::MAX)),
        )?;
        Ok(ListingQuery {
            month,
            search: SearchTerm::new(self.search.as_deref().unwrap_or_default()),
            page,
        })
    }
}
