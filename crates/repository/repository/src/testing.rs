use std::collections::HashSet;

use pholio_core::{NewPhoto, PhotoId, PhotoRecord, Timestamp};

use crate::error::RepositoryError;
use crate::repository::Repository;

fn test_record(description: &str) -> PhotoRecord {
    PhotoRecord::from_new(
        NewPhoto::new(description, format!("content of {description}")),
        PhotoId::generate(),
        Timestamp::now(),
    )
}

/// Run the full repository conformance test suite.
///
/// Call this from your backend's test module with a fresh repository
/// instance.
///
/// # Errors
///
/// Returns an error if any conformance test fails.
pub async fn run_repository_conformance_tests(
    repo: &dyn Repository,
) -> Result<(), RepositoryError> {
    test_get_missing(repo).await?;
    test_insert_and_get(repo).await?;
    test_insert_is_not_idempotent(repo).await?;
    test_sample_empty_count(repo).await?;
    test_sample_bounds_and_membership(repo).await?;
    Ok(())
}

async fn test_get_missing(repo: &dyn Repository) -> Result<(), RepositoryError> {
    let id = PhotoId::from("never-inserted");
    let found = repo.get_by_id(&id).await?;
    assert!(found.is_none(), "get_by_id on missing id should return None");
    Ok(())
}

async fn test_insert_and_get(repo: &dyn Repository) -> Result<(), RepositoryError> {
    let record = test_record("insert-and-get");
    let stored = repo.insert(record.clone()).await?;
    assert_eq!(stored, record, "insert should return the stored record");

    let found = repo.get_by_id(&record.id).await?;
    assert_eq!(
        found.as_ref(),
        Some(&record),
        "get_by_id should return an identical record"
    );
    Ok(())
}

async fn test_insert_is_not_idempotent(repo: &dyn Repository) -> Result<(), RepositoryError> {
    // Same logical photo, two service-assigned ids: both must be stored.
    let a = test_record("duplicate");
    let b = PhotoRecord {
        id: PhotoId::generate(),
        ..a.clone()
    };
    assert_ne!(a.id, b.id);
    repo.insert(a.clone()).await?;
    repo.insert(b.clone()).await?;
    assert!(repo.get_by_id(&a.id).await?.is_some());
    assert!(repo.get_by_id(&b.id).await?.is_some());
    Ok(())
}

async fn test_sample_empty_count(repo: &dyn Repository) -> Result<(), RepositoryError> {
    let sampled = repo.sample(0).await?;
    assert!(sampled.is_empty(), "sample(0) should be empty");
    Ok(())
}

async fn test_sample_bounds_and_membership(repo: &dyn Repository) -> Result<(), RepositoryError> {
    let mut inserted = HashSet::new();
    for i in 0..8 {
        let record = test_record(&format!("sample-{i}"));
        inserted.insert(record.id.clone());
        repo.insert(record).await?;
    }

    // Asking for more than the collection holds caps at the total.
    let all = repo.sample(1000).await?;
    assert!(
        all.len() >= inserted.len(),
        "sample should return at least the records inserted by this suite"
    );

    // A bounded sample is distinct and drawn from the collection.
    let sampled = repo.sample(5).await?;
    assert_eq!(sampled.len(), 5, "sample(5) on a store of >=8 should return 5");
    let ids: HashSet<_> = sampled.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), sampled.len(), "sampled records must be distinct");
    for record in &sampled {
        assert!(
            repo.get_by_id(&record.id).await?.is_some(),
            "sampled record must be a member of the collection"
        );
    }
    Ok(())
}
