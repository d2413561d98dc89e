pub mod migrations;
pub mod transaction_repo;
