use async_trait::async_trait;

use crate::error::RosterError;
use crate::models::User;

/// Authoritative owner of the user collection and its id counter.
///
/// Every mutation must be atomic with respect to concurrent requests: no
/// caller may observe a partially applied insert, replace or remove, and the
/// email-uniqueness check happens under the same exclusion as the write.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Snapshot of all live records.
    async fn list(&self) -> Result<Vec<User>, RosterError>;

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, RosterError>;

    /// Assigns the next id, stamps `created_at` and appends the record.
    /// Fails with `EmailTaken` if another record owns the email.
    async fn insert(&self, name: String, email: String) -> Result<User, RosterError>;

    /// Overwrites name and email of an existing record and stamps
    /// `updated_at`. The uniqueness check excludes the record itself.
    async fn replace(&self, id: u64, name: String, email: String) -> Result<User, RosterError>;

    /// Detaches and returns the record. Ids are never recycled afterwards.
    async fn remove(&self, id: u64) -> Result<User, RosterError>;
}

pub mod in_memory;
