use std::sync::Arc;
use tokio::sync::Barrier;
use url_redirector::domain::entities::{NewUser, NewWebsiteEntry};
use url_redirector::domain::repositories::{UserRepository, WebsiteRepository};
use url_redirector::error::AppError;
use url_redirector::infrastructure::persistence::{MemoryUserRepository, MemoryWebsiteRepository};

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}

fn new_entry(name: &str, destination: &str, owner_id: Option<i64>) -> NewWebsiteEntry {
    NewWebsiteEntry {
        name: name.to_string(),
        destination: destination.to_string(),
        owner_id,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_name_creators_one_wins() {
    let repo = Arc::new(MemoryWebsiteRepository::new());
    let start = Arc::new(Barrier::new(16));

    let mut handles = Vec::new();
    for i in 0..16 {
        let repo = repo.clone();
        let start = start.clone();
        handles.push(tokio::spawn(async move {
            start.wait().await;
            repo.create(new_entry("x", &format!("https://{i}.example"), Some(i)))
                .await
        }));
    }

    let mut created = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::DuplicateName { name }) => {
                assert_eq!(name, "x");
                duplicates += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(duplicates, 15);
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_email_registrations_one_wins() {
    let repo = Arc::new(MemoryUserRepository::new());
    let start = Arc::new(Barrier::new(16));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let repo = repo.clone();
        let start = start.clone();
        handles.push(tokio::spawn(async move {
            start.wait().await;
            repo.create(new_user("a@x.com")).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::DuplicateEmail { .. }) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_distinct_names_all_succeed_concurrently() {
    let repo = Arc::new(MemoryWebsiteRepository::new());

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.create(new_entry(&format!("n{i}"), "https://a.example", None))
                .await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let entries = repo.list_all().await.unwrap();
    assert_eq!(entries.len(), 8);

    let mut ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[tokio::test]
async fn test_deleted_name_can_be_registered_again() {
    let repo = MemoryWebsiteRepository::new();

    let first = repo
        .create(new_entry("x", "https://a.example", Some(1)))
        .await
        .unwrap();
    assert!(repo.delete(first.id).await.unwrap());

    let second = repo
        .create(new_entry("x", "https://b.example", Some(2)))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(
        repo.find_by_name("x").await.unwrap().unwrap().destination,
        "https://b.example"
    );
}
