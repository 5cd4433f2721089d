//! In-process repository implementations.
//!
//! Each store keeps its rows behind a single `RwLock`. Uniqueness checks and
//! inserts happen under one write guard, giving the same guarantees as the
//! PostgreSQL unique constraints.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, NewWebsiteEntry, User, WebsiteEntry};
use crate::domain::repositories::{UserRepository, WebsiteRepository};
use crate::error::AppError;

struct Table<T> {
    next_id: i64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory user store.
#[derive(Default)]
pub struct MemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut table = self.table.write().await;

        if table.rows.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::DuplicateEmail {
                email: new_user.email,
            });
        }

        let user = User::new(
            table.allocate_id(),
            new_user.email,
            new_user.password_hash,
            Utc::now(),
        );
        table.rows.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.table.read().await.rows.clone())
    }
}

/// In-memory website entry store.
///
/// Deleted ids are never reused.
#[derive(Default)]
pub struct MemoryWebsiteRepository {
    table: RwLock<Table<WebsiteEntry>>,
}

impl MemoryWebsiteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WebsiteRepository for MemoryWebsiteRepository {
    async fn create(&self, new_entry: NewWebsiteEntry) -> Result<WebsiteEntry, AppError> {
        let mut table = self.table.write().await;

        if table.rows.iter().any(|e| e.name == new_entry.name) {
            return Err(AppError::DuplicateName {
                name: new_entry.name,
            });
        }

        let entry = WebsiteEntry::new(
            table.allocate_id(),
            new_entry.name,
            new_entry.destination,
            new_entry.owner_id,
            Utc::now(),
        );
        table.rows.push(entry.clone());

        Ok(entry)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<WebsiteEntry>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<WebsiteEntry>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|e| e.name == name).cloned())
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<WebsiteEntry>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|e| e.owner_id == Some(owner_id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<WebsiteEntry>, AppError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|e| e.id != id);
        Ok(table.rows.len() < before)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_ids_are_sequential() {
        let repo = MemoryUserRepository::new();

        let first = repo
            .create(NewUser {
                email: "a@x.com".to_string(),
                password_hash: "h".to_string(),
            })
            .await
            .unwrap();
        let second = repo
            .create(NewUser {
                email: "b@x.com".to_string(),
                password_hash: "h".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_deleted_website_id_is_not_reused() {
        let repo = MemoryWebsiteRepository::new();

        let entry = repo
            .create(NewWebsiteEntry {
                name: "a".to_string(),
                destination: "https://a.example".to_string(),
                owner_id: None,
            })
            .await
            .unwrap();
        assert!(repo.delete(entry.id).await.unwrap());

        let next = repo
            .create(NewWebsiteEntry {
                name: "a".to_string(),
                destination: "https://a.example".to_string(),
                owner_id: None,
            })
            .await
            .unwrap();

        assert_ne!(entry.id, next.id);
    }
}
