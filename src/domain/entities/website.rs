//! Website entry entity: a short name mapped to a destination.

use chrono::{DateTime, Utc};

/// A registered short name and the destination it redirects to.
///
/// `owner_id` is a non-owning reference into the user table. It is `None` for
/// entries created in global ownership mode.
#[derive(Debug, Clone)]
pub struct WebsiteEntry {
    pub id: i64,
    pub name: String,
    pub destination: String,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl WebsiteEntry {
    /// Creates a new WebsiteEntry instance.
    pub fn new(
        id: i64,
        name: String,
        destination: String,
        owner_id: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            destination,
            owner_id,
            created_at,
        }
    }

    /// Returns true if `user_id` owns this entry.
    ///
    /// Unowned entries are owned by nobody.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == Some(user_id)
    }
}

/// Input data for creating a new website entry.
#[derive(Debug, Clone)]
pub struct NewWebsiteEntry {
    pub name: String,
    pub destination: String,
    pub owner_id: Option<i64>,
}
