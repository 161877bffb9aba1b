use async_trait::async_trait;

use crate::domain::users::user::User;

/// Store-facing port for the `user` table. Each call runs in its own
/// transaction; store errors are returned untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
    /// Returns `false` when a row with this `sso` already exists.
    async fn create_user(&self, sso: &str, role: &str) -> anyhow::Result<bool>;
    /// Returns `false` when nothing matched.
    async fn delete_user(&self, sso: &str) -> anyhow::Result<bool>;
    /// Returns `false` when nothing matched.
    async fn set_agree(&self, sso: &str) -> anyhow::Result<bool>;
}
