//! ReviewStore interface tests.

use moviehub::interfaces::ReviewStore;
use moviehub::Review;

pub async fn test_save_assigns_id<S: ReviewStore>(store: &S) {
    let saved = store
        .save(Review::new("test_movie_save", "Awesome Movie", 9.0))
        .await
        .expect("save should succeed");

    let id = saved.id.clone().expect("saved review should have an id");
    let found = store
        .find_by_id(&id)
        .await
        .expect("find_by_id should succeed")
        .expect("saved review should be found");
    assert_eq!(found, saved);
}

pub async fn test_find_by_movie_info_id_filters<S: ReviewStore>(store: &S) {
    store
        .save(Review::new("test_movie_1", "Awesome Movie", 9.0))
        .await
        .expect("save should succeed");
    store
        .save(Review::new("test_movie_1", "Awesome Movie1", 9.0))
        .await
        .expect("save should succeed");
    store
        .save(Review::new("test_movie_2", "Excellent Movie", 8.0))
        .await
        .expect("save should succeed");

    let reviews = store
        .find_by_movie_info_id("test_movie_1")
        .await
        .expect("find_by_movie_info_id should succeed");

    assert_eq!(reviews.len(), 2);
    assert!(reviews
        .iter()
        .all(|r| r.movie_info_id.as_deref() == Some("test_movie_1")));

    let all = store.find_all().await.expect("find_all should succeed");
    assert!(all.len() >= 3);
}

pub async fn test_save_replaces_existing<S: ReviewStore>(store: &S) {
    let saved = store
        .save(Review::new("test_movie_replace", "Good", 7.0))
        .await
        .expect("save should succeed");
    let id = saved.id.clone().expect("id");

    let mut changed = saved;
    changed.comment = "Better on rewatch".to_string();
    changed.rating = 8.5;
    store.save(changed).await.expect("save should succeed");

    let found = store
        .find_by_id(&id)
        .await
        .expect("find_by_id should succeed")
        .expect("review should exist");
    assert_eq!(found.comment, "Better on rewatch");
    assert_eq!(found.rating, 8.5);
}

pub async fn test_replace_missing_is_not_inserted<S: ReviewStore>(store: &S) {
    let review = Review::new("test_movie_replace_missing", "Ghost", 2.0)
        .with_id("test_review_never_saved");

    let replaced = store.replace(review).await.expect("replace should succeed");

    assert!(replaced.is_none());
    assert!(store
        .find_by_movie_info_id("test_movie_replace_missing")
        .await
        .expect("find_by_movie_info_id should succeed")
        .is_empty());
}

pub async fn test_delete_removes<S: ReviewStore>(store: &S) {
    let saved = store
        .save(Review::new("test_movie_delete", "Bad", 1.0))
        .await
        .expect("save should succeed");
    let id = saved.id.expect("id");

    store.delete_by_id(&id).await.expect("delete should succeed");
    store
        .delete_by_id(&id)
        .await
        .expect("second delete should be a no-op");

    assert!(store
        .find_by_id(&id)
        .await
        .expect("find_by_id should succeed")
        .is_none());
}

/// Run all ReviewStore tests against a store implementation.
#[macro_export]
macro_rules! run_review_store_tests {
    ($store:expr) => {
        use $crate::storage::review_store_tests::*;

        test_save_assigns_id($store).await;
        println!("  test_save_assigns_id: PASSED");

        test_find_by_movie_info_id_filters($store).await;
        println!("  test_find_by_movie_info_id_filters: PASSED");

        test_save_replaces_existing($store).await;
        println!("  test_save_replaces_existing: PASSED");

        test_replace_missing_is_not_inserted($store).await;
        println!("  test_replace_missing_is_not_inserted: PASSED");

        test_delete_removes($store).await;
        println!("  test_delete_removes: PASSED");
    };
}
