use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use database_traits::dao::UserStore;
use user_errors::UserError;
use user_models::User;

/// In-memory [`UserStore`] for handler and router tests.
///
/// Records the arguments of every call and can be primed to fail, so
/// tests can pin down both the happy path and the error path without a
/// database.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    next_id: i64,
    fail_with: Option<String>,
    calls: Vec<(String, String)>,
}

impl InMemoryUserStore {
    pub fn new() -> Self { Self::default() }

    /// Seed a user and return its id
    pub fn insert(&self, email: &str, name: &str) -> i64 {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.next_id += 1;
        let id = inner.next_id;
        inner.users.push(User {
            id,
            email: email.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        });
        id
    }

    /// Make every subsequent store call fail with an internal error
    pub fn fail_with(&self, message: &str) {
        self.inner.lock().expect("store mutex poisoned").fail_with =
            Some(message.to_string());
    }

    /// Arguments of every `update_name` call, in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .calls
            .clone()
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    type Error = UserError;
    type Record = User;

    async fn update_name(
        &self, email: &str, name: &str,
    ) -> Result<User, UserError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.calls.push((email.to_string(), name.to_string()));

        if let Some(message) = &inner.fail_with {
            return Err(UserError::InternalError(message.clone()));
        }

        let user = inner
            .users
            .iter_mut()
            .find(|user| user.email == email)
            .ok_or_else(|| UserError::NotFound {
                email: email.to_string(),
            })?;
        user.name = name.to_string();
        Ok(user.clone())
    }
}
