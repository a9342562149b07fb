use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::RosterError;
use crate::models::User;
use crate::store::UserStore;

/// Process-local user collection with a monotonic id counter.
///
/// The collection and the counter live under a single `RwLock` so each
/// mutation, including its uniqueness check, is applied atomically; reads
/// share the lock. The counter is a `u64` and never wraps in practice —
/// exhaustion is treated as fatal and not handled.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    users: Vec<User>,
    next_id: u64,
}

const SEED_USERS: [(&str, &str); 5] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Bob Johnson", "bob@example.com"),
    ("Alice Brown", "alice@example.com"),
    ("Charlie Wilson", "charlie@example.com"),
];

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            inner: Arc::new(RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// A store preloaded with the fixed demo records (ids 1 through 5).
    pub fn seeded() -> Self {
        let now = Utc::now();
        let users: Vec<User> = SEED_USERS
            .iter()
            .enumerate()
            .map(|(index, (name, email))| User {
                id: index as u64 + 1,
                name: (*name).to_string(),
                email: (*email).to_string(),
                created_at: now,
                updated_at: None,
            })
            .collect();
        let next_id = users.len() as u64 + 1;

        InMemoryStore {
            inner: Arc::new(RwLock::new(Inner { users, next_id })),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, RosterError> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, RosterError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn insert(&self, name: String, email: String) -> Result<User, RosterError> {
        let mut inner = self.inner.write().await;
        if inner
            .users
            .iter()
            .any(|user| user.email.eq_ignore_ascii_case(&email))
        {
            return Err(RosterError::EmailTaken(email));
        }

        let user = User {
            id: inner.next_id,
            name,
            email,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn replace(&self, id: u64, name: String, email: String) -> Result<User, RosterError> {
        let mut inner = self.inner.write().await;
        if !inner.users.iter().any(|user| user.id == id) {
            return Err(RosterError::UserNotFound(id.to_string()));
        }
        if inner
            .users
            .iter()
            .any(|user| user.id != id && user.email.eq_ignore_ascii_case(&email))
        {
            return Err(RosterError::EmailTaken(email));
        }

        let user = inner
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| RosterError::UserNotFound(id.to_string()))?;
        user.name = name;
        user.email = email;
        user.updated_at = Some(Utc::now());
        Ok(user.clone())
    }

    async fn remove(&self, id: u64) -> Result<User, RosterError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| RosterError::UserNotFound(id.to_string()))?;
        Ok(inner.users.remove(index))
    }
}
