pub mod categories;
pub mod combined_view;
pub mod histogram;
pub mod list_transactions;
pub mod seed;
pub mod statistics;
