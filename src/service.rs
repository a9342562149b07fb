use tracing::{debug, info};

use crate::error::RosterError;
use crate::models::User;
use crate::query::{self, ListQuery, Pagination};
use crate::store::UserStore;
use crate::validate;

/// Composes validator, store and query engine behind one seam. Handlers only
/// add the HTTP envelope on top.
pub struct RosterService<S: UserStore> {
    store: S,
}

impl<S: UserStore> RosterService<S> {
    pub fn new(store: S) -> Self {
        RosterService { store }
    }

    pub async fn list_users(
        &self,
        params: &ListQuery,
    ) -> Result<(Vec<User>, Pagination), RosterError> {
        let users = self.store.list().await?;
        let (page, pagination) = query::select_page(&users, params);
        debug!(
            page = pagination.current_page,
            total = pagination.total,
            "listed users"
        );
        Ok((page, pagination))
    }

    pub async fn get_user(&self, raw_id: &str) -> Result<User, RosterError> {
        let id = parse_id(raw_id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::UserNotFound(raw_id.to_string()))
    }

    pub async fn create_user(
        &self,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, RosterError> {
        let fields = validate::require_name_and_email(name.as_deref(), email.as_deref())?;
        let user = self.store.insert(fields.name, fields.email).await?;
        info!(id = user.id, "user created");
        Ok(user)
    }

    /// Existence is checked before validation so unknown ids answer 404 even
    /// when the payload is also invalid.
    pub async fn update_user(
        &self,
        raw_id: &str,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, RosterError> {
        let id = parse_id(raw_id)?;
        if self.store.find_by_id(id).await?.is_none() {
            return Err(RosterError::UserNotFound(raw_id.to_string()));
        }
        let fields = validate::require_name_and_email(name.as_deref(), email.as_deref())?;
        let user = self.store.replace(id, fields.name, fields.email).await?;
        info!(id = user.id, "user updated");
        Ok(user)
    }

    pub async fn delete_user(&self, raw_id: &str) -> Result<User, RosterError> {
        let id = parse_id(raw_id)?;
        let user = self.store.remove(id).await?;
        info!(id = user.id, "user deleted");
        Ok(user)
    }
}

// Non-integer and non-positive ids are treated as not-found, not as a
// malformed request.
fn parse_id(raw: &str) -> Result<u64, RosterError> {
    raw.parse::<u64>()
        .ok()
        .filter(|&id| id > 0)
        .ok_or_else(|| RosterError::UserNotFound(raw.to_string()))
}
