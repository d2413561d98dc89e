pub mod month;
pub mod page;
pub mod price_range;
pub mod query;
pub mod search;
