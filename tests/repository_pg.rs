use sqlx::PgPool;
use std::sync::Arc;
use url_redirector::domain::entities::{NewUser, NewWebsiteEntry};
use url_redirector::domain::repositories::{UserRepository, WebsiteRepository};
use url_redirector::error::AppError;
use url_redirector::infrastructure::persistence::{PgUserRepository, PgWebsiteRepository};

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    repo.create(NewUser {
        email: email.to_string(),
        password_hash: "hash".to_string(),
    })
    .await
    .unwrap()
    .id
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_and_find_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .create(NewUser {
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();

    let by_email = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);

    let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "a@x.com");

    assert!(repo.find_by_email("A@x.com").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_duplicate_email_is_mapped(pool: PgPool) {
    seed_user(&pool, "a@x.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUser {
            email: "a@x.com".to_string(),
            password_hash: "other".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DuplicateEmail { .. })));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_duplicate_name_is_mapped(pool: PgPool) {
    let owner = seed_user(&pool, "a@x.com").await;
    let repo = PgWebsiteRepository::new(Arc::new(pool));

    repo.create(NewWebsiteEntry {
        name: "blog".to_string(),
        destination: "https://blog.example".to_string(),
        owner_id: Some(owner),
    })
    .await
    .unwrap();

    let result = repo
        .create(NewWebsiteEntry {
            name: "blog".to_string(),
            destination: "https://other.example".to_string(),
            owner_id: Some(owner),
        })
        .await;

    assert!(matches!(result, Err(AppError::DuplicateName { .. })));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_by_owner_and_delete(pool: PgPool) {
    let first = seed_user(&pool, "u1@x.com").await;
    let second = seed_user(&pool, "u2@x.com").await;
    let repo = PgWebsiteRepository::new(Arc::new(pool));

    let mine = repo
        .create(NewWebsiteEntry {
            name: "mine".to_string(),
            destination: "https://mine.example".to_string(),
            owner_id: Some(first),
        })
        .await
        .unwrap();
    repo.create(NewWebsiteEntry {
        name: "theirs".to_string(),
        destination: "https://theirs.example".to_string(),
        owner_id: Some(second),
    })
    .await
    .unwrap();
    repo.create(NewWebsiteEntry {
        name: "shared".to_string(),
        destination: "https://shared.example".to_string(),
        owner_id: None,
    })
    .await
    .unwrap();

    let owned = repo.list_by_owner(first).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name, "mine");
    assert_eq!(repo.list_all().await.unwrap().len(), 3);

    assert!(repo.delete(mine.id).await.unwrap());
    assert!(!repo.delete(mine.id).await.unwrap());
    assert!(repo.find_by_name("mine").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgWebsiteRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
