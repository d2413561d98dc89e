pub mod seed_source;
pub mod transaction_repository;
