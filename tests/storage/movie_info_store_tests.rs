//! MovieInfoStore interface tests.
//!
//! Tests only assume that records they create are visible to them, so they
//! can run against a shared database.

use chrono::NaiveDate;

use moviehub::interfaces::MovieInfoStore;
use moviehub::MovieInfo;

/// Build a record that is unique to one test.
pub fn make_movie_info(name: &str, year: i32) -> MovieInfo {
    MovieInfo::new(
        name,
        year,
        vec!["Christian Bale".to_string(), "Michael Cane".to_string()],
        NaiveDate::from_ymd_opt(year, 5, 15),
    )
}

// =============================================================================
// save tests
// =============================================================================

pub async fn test_save_assigns_id<S: MovieInfoStore>(store: &S) {
    let saved = store
        .save(make_movie_info("test_save_assigns_id", 2005))
        .await
        .expect("save should succeed");

    let id = saved.id.clone().expect("saved record should have an id");
    assert!(!id.is_empty());
    assert_eq!(saved.name, "test_save_assigns_id");

    let found = store
        .find_by_id(&id)
        .await
        .expect("find_by_id should succeed")
        .expect("saved record should be found");
    assert_eq!(found, saved);
}

pub async fn test_save_replaces_existing<S: MovieInfoStore>(store: &S) {
    let saved = store
        .save(make_movie_info("test_save_replaces_existing", 2005))
        .await
        .expect("save should succeed");
    let id = saved.id.clone().expect("id");

    let mut changed = saved.clone();
    changed.year = 2021;
    changed.cast = vec!["Tom Hardy".to_string()];
    let updated = store.save(changed).await.expect("save should succeed");

    assert_eq!(updated.id.as_deref(), Some(id.as_str()));
    let found = store
        .find_by_id(&id)
        .await
        .expect("find_by_id should succeed")
        .expect("record should exist");
    assert_eq!(found.year, 2021);
    assert_eq!(found.cast, vec!["Tom Hardy".to_string()]);
}

pub async fn test_replace_updates_existing<S: MovieInfoStore>(store: &S) {
    let saved = store
        .save(make_movie_info("test_replace_updates_existing", 2005))
        .await
        .expect("save should succeed");
    let id = saved.id.clone().expect("id");

    let mut changed = saved;
    changed.year = 2006;
    let replaced = store
        .replace(changed)
        .await
        .expect("replace should succeed")
        .expect("existing record should be replaced");

    assert_eq!(replaced.id.as_deref(), Some(id.as_str()));
    let found = store
        .find_by_id(&id)
        .await
        .expect("find_by_id should succeed")
        .expect("record should exist");
    assert_eq!(found.year, 2006);
}

pub async fn test_replace_does_not_resurrect_deleted<S: MovieInfoStore>(store: &S) {
    let saved = store
        .save(make_movie_info("test_replace_does_not_resurrect", 2005))
        .await
        .expect("save should succeed");
    let id = saved.id.clone().expect("id");

    store.delete_by_id(&id).await.expect("delete should succeed");

    let replaced = store.replace(saved).await.expect("replace should succeed");
    assert!(replaced.is_none());
    assert!(store
        .find_by_id(&id)
        .await
        .expect("find_by_id should succeed")
        .is_none());
}

// =============================================================================
// find tests
// =============================================================================

pub async fn test_find_all_includes_saved<S: MovieInfoStore>(store: &S) {
    let before = store.find_all().await.expect("find_all should succeed").len();

    store
        .save(make_movie_info("test_find_all_a", 2005))
        .await
        .expect("save should succeed");
    store
        .save(make_movie_info("test_find_all_b", 2008))
        .await
        .expect("save should succeed");

    let after = store.find_all().await.expect("find_all should succeed").len();
    assert_eq!(after, before + 2);
}

pub async fn test_find_by_year_filters<S: MovieInfoStore>(store: &S) {
    // Years far from real releases to avoid clashing with shared data.
    store
        .save(make_movie_info("test_find_by_year_a", 1901))
        .await
        .expect("save should succeed");
    store
        .save(make_movie_info("test_find_by_year_b", 1901))
        .await
        .expect("save should succeed");
    store
        .save(make_movie_info("test_find_by_year_c", 1902))
        .await
        .expect("save should succeed");

    let found = store
        .find_by_year(1901)
        .await
        .expect("find_by_year should succeed");

    assert!(found.len() >= 2);
    assert!(found.iter().all(|m| m.year == 1901));
    assert!(found.iter().any(|m| m.name == "test_find_by_year_a"));
    assert!(!found.iter().any(|m| m.name == "test_find_by_year_c"));
}

pub async fn test_find_by_id_missing<S: MovieInfoStore>(store: &S) {
    let found = store
        .find_by_id("test_no_such_movie")
        .await
        .expect("find_by_id should succeed");
    assert!(found.is_none());
}

// =============================================================================
// delete tests
// =============================================================================

pub async fn test_delete_removes<S: MovieInfoStore>(store: &S) {
    let saved = store
        .save(make_movie_info("test_delete_removes", 2012))
        .await
        .expect("save should succeed");
    let id = saved.id.expect("id");

    store.delete_by_id(&id).await.expect("delete should succeed");

    let found = store.find_by_id(&id).await.expect("find_by_id should succeed");
    assert!(found.is_none());
}

pub async fn test_delete_missing_is_noop<S: MovieInfoStore>(store: &S) {
    store
        .delete_by_id("test_no_such_movie")
        .await
        .expect("deleting a missing id should succeed");
}

/// Run all MovieInfoStore tests against a store implementation.
#[macro_export]
macro_rules! run_movie_info_store_tests {
    ($store:expr) => {
        use $crate::storage::movie_info_store_tests::*;

        test_save_assigns_id($store).await;
        println!("  test_save_assigns_id: PASSED");

        test_save_replaces_existing($store).await;
        println!("  test_save_replaces_existing: PASSED");

        test_replace_updates_existing($store).await;
        println!("  test_replace_updates_existing: PASSED");

        test_replace_does_not_resurrect_deleted($store).await;
        println!("  test_replace_does_not_resurrect_deleted: PASSED");

        test_find_all_includes_saved($store).await;
        println!("  test_find_all_includes_saved: PASSED");

        test_find_by_year_filters($store).await;
        println!("  test_find_by_year_filters: PASSED");

        test_find_by_id_missing($store).await;
        println!("  test_find_by_id_missing: PASSED");

        test_delete_removes($store).await;
        println!("  test_delete_removes: PASSED");

        test_delete_missing_is_noop($store).await;
        println!("  test_delete_missing_is_noop: PASSED");
    };
}
