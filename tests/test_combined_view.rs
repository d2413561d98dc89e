mod common;

use common::{catalogue, setup, setup_with, sqlite_repo, FailOn, FailingRepo};
use salescope::domain::error::DomainError;
use salescope::domain::ports::transaction_repository::TransactionRepository;
use salescope::domain::values::query::{QueryDefaults, TransactionQuery};
use salescope::Salescope;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_combined_view_matches_individual_views() {
    let app = setup(&catalogue()).await;
    let query = TransactionQuery {
        month: Some(3),
        search: Some("item".into()),
        page: Some(2),
        per_page: Some(3),
    };

    let combined = app.combined_view(&query).await.unwrap();
    assert_eq!(combined.listing, app.list_transactions(&query).await.unwrap());
    assert_eq!(combined.statistics, app.statistics(&query).await.unwrap());
    assert_eq!(combined.histogram, app.histogram(&query).await.unwrap());
    assert_eq!(combined.categories, app.category_counts(&query).await.unwrap());

    // Search narrows the listing only.
    let narrow = TransactionQuery {
        search: Some("no such item".into()),
        ..query.clone()
    };
    let narrowed = app.combined_view(&narrow).await.unwrap();
    assert_eq!(narrowed.listing.total, 0);
    assert_eq!(narrowed.statistics, combined.statistics);
}

#[tokio::test]
async fn test_combined_view_serializes_by_view_name() {
    let app = setup(&catalogue()).await;
    let combined = app
        .combined_view(&TransactionQuery::for_month(1))
        .await
        .unwrap();
    let json = serde_json::to_value(&combined).unwrap();
    for key in ["listing", "statistics", "histogram", "categories"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json["statistics"].get("totalAmount").is_some());
    assert!(json["statistics"].get("notSoldCount").is_some());
    assert_eq!(json["histogram"]["buckets"][0]["rangeLabel"], "0-100");
    assert!(json["listing"]["items"][0].get("dateOfSale").is_some());
}

#[tokio::test]
async fn test_histogram_failure_fails_whole_view() {
    let inner = sqlite_repo();
    let repo = Arc::new(FailingRepo::new(inner, FailOn::PriceRangeCount));
    let app = setup_with(repo, &catalogue()).await;
    let query = TransactionQuery::for_month(3);

    // The other views still work on their own.
    assert!(app.statistics(&query).await.is_ok());
    assert!(app.list_transactions(&query).await.is_ok());

    let err = app.combined_view(&query).await.unwrap_err();
    match &err {
        DomainError::Aggregation { view, source } => {
            assert_eq!(*view, "histogram");
            assert!(matches!(**source, DomainError::StoreUnavailable(_)));
        }
        other => panic!("expected aggregation failure, got {other:?}"),
    }
    assert!(matches!(err.root_cause(), DomainError::StoreUnavailable(_)));
}

#[tokio::test]
async fn test_failure_cancels_slow_sub_queries() {
    let mut repo = FailingRepo::new(sqlite_repo(), FailOn::PriceRangeCount);
    repo.find_delay = Some(Duration::from_secs(30));
    let repo = Arc::new(repo);
    repo.insert_many(&catalogue()).await.unwrap();
    let app = Salescope::with_repository(repo, QueryDefaults::default());

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        app.combined_view(&TransactionQuery::for_month(3)),
    )
    .await
    .expect("combined view waited for the stalled listing");
    assert!(result.is_err());
}

#[tokio::test]
async fn test_validation_happens_before_store_access() {
    let repo = Arc::new(FailingRepo::new(sqlite_repo(), FailOn::Everything));
    let app = Salescope::with_repository(repo, QueryDefaults::default());

    let bad_month = app
        .combined_view(&TransactionQuery::for_month(0))
        .await
        .unwrap_err();
    assert!(matches!(bad_month, DomainError::Validation(_)));

    let missing_month = app
        .combined_view(&TransactionQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(missing_month, DomainError::Validation(_)));

    let bad_page = app
        .combined_view(&TransactionQuery {
            month: Some(3),
            page: Some(0),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(bad_page, DomainError::Validation(_)));

    // A valid query reaches the broken store.
    let store_down = app
        .combined_view(&TransactionQuery::for_month(3))
        .await
        .unwrap_err();
    assert!(matches!(
        store_down.root_cause(),
        DomainError::StoreUnavailable(_)
    ));
}
