pub mod file;
pub mod http;

/// The product-transaction document the service was originally seeded from.
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";
