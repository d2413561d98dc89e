mod common;

use common::{memory_repo, sqlite_repo};
use salescope::domain::error::DomainError;
use salescope::domain::values::query::{QueryDefaults, TransactionQuery};
use salescope::infrastructure::seed::file::FileSeedSource;
use salescope::infrastructure::sqlite::transaction_repo::SqliteTransactionRepo;
use salescope::Salescope;
use std::io::Write;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};

const SEED: &str = r#"[
  {"id": 1, "title": "Fjallraven Backpack", "price": 329.85,
   "description": "Your perfect pack for everyday use", "category": "men's clothing",
   "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
   "sold": false, "dateOfSale": "2021-11-27T20:29:54+05:30"},
  {"id": 2, "title": "Mens Casual T-Shirt", "price": 44.6,
   "description": "Slim-fitting style", "category": "men's clothing",
   "sold": false, "dateOfSale": "2021-10-27T20:29:54+05:30"},
  {"id": 3, "title": "Gold Ring", "price": 900, "description": "Solid gold",
   "category": "jewelery", "sold": true, "dateOfSale": "2022-03-27T20:29:54+05:30"},
  {"id": 4, "title": "Silver Bracelet", "price": 100, "description": "Classic",
   "category": "jewelery", "sold": true, "dateOfSale": "2021-03-02T10:00:00Z"},
  {"id": 5, "title": "Broken record", "price": -3, "category": "electronics",
   "dateOfSale": "2021-03-02T10:00:00Z"},
  {"id": 6, "title": "Undated", "price": 12, "category": "electronics",
   "dateOfSale": "last tuesday"}
]"#;

fn seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_import_skips_invalid_records() {
    let file = seed_file(SEED);
    let app = Salescope::with_repository(sqlite_repo(), QueryDefaults::default());

    let report = app.import_seed(&FileSeedSource::new(file.path())).await.unwrap();
    assert_eq!(report.fetched, 6);
    assert_eq!(report.inserted, 4);
    assert_eq!(report.skipped, 2);

    let march = app
        .statistics(&TransactionQuery::for_month(3))
        .await
        .unwrap();
    assert_eq!(march.total_amount, 1000.0);
    assert_eq!(march.sold_count, 2);
    assert_eq!(march.not_sold_count, 0);
}

#[tokio::test]
async fn test_import_is_idempotent() {
    let file = seed_file(SEED);
    for repo in [sqlite_repo(), memory_repo()] {
        let app = Salescope::with_repository(repo, QueryDefaults::default());
        let source = FileSeedSource::new(file.path());

        let first = app.import_seed(&source).await.unwrap();
        let second = app.import_seed(&source).await.unwrap();
        assert_eq!(first.inserted, 4);
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 6);

        let all: u64 = {
            let mut total = 0;
            for month in 1..=12 {
                total += app
                    .list_transactions(&TransactionQuery::for_month(month))
                    .await
                    .unwrap()
                    .total;
            }
            total
        };
        assert_eq!(all, 4);
    }
}

#[tokio::test]
async fn test_seed_dates_are_normalized_to_utc() {
    // 20:29:54+05:30 is 14:59:54 UTC, still the same calendar month.
    let file = seed_file(SEED);
    let app = Salescope::with_repository(memory_repo(), QueryDefaults::default());
    app.import_seed(&FileSeedSource::new(file.path())).await.unwrap();

    let november = app
        .list_transactions(&TransactionQuery::for_month(11))
        .await
        .unwrap();
    assert_eq!(november.total, 1);
    let backpack = &november.items[0];
    assert_eq!(backpack.id, "1");
    assert_eq!(backpack.date_of_sale.to_rfc3339(), "2021-11-27T14:59:54+00:00");
    assert!(backpack.image.is_some());
}

#[tokio::test]
async fn test_missing_or_malformed_file_is_import_error() {
    let app = Salescope::with_repository(sqlite_repo(), QueryDefaults::default());
    let dir = TempDir::new().unwrap();

    let missing = app
        .import_seed(&FileSeedSource::new(dir.path().join("nope.json")))
        .await
        .unwrap_err();
    assert!(matches!(missing, DomainError::Import(_)));

    let garbage = seed_file("{\"not\": \"an array\"}");
    let malformed = app
        .import_seed(&FileSeedSource::new(garbage.path()))
        .await
        .unwrap_err();
    assert!(matches!(malformed, DomainError::Import(_)));
}

#[tokio::test]
async fn test_imported_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("sales.db");
    let db_path = db_path.to_str().unwrap();
    let file = seed_file(SEED);

    {
        let repo = Arc::new(SqliteTransactionRepo::open(db_path).unwrap());
        let app = Salescope::with_repository(repo, QueryDefaults::default());
        app.import_seed(&FileSeedSource::new(file.path())).await.unwrap();
    }

    let repo = Arc::new(SqliteTransactionRepo::open(db_path).unwrap());
    let app = Salescope::with_repository(repo, QueryDefaults::default());
    let pie = app
        .category_counts(&TransactionQuery::for_month(3))
        .await
        .unwrap();
    assert_eq!(pie.get("jewelery"), Some(&2));
    assert_eq!(pie.len(), 1);

    // Reopening the same file and importing again adds nothing.
    let again = app.import_seed(&FileSeedSource::new(file.path())).await.unwrap();
    assert_eq!(again.inserted, 0);
}
