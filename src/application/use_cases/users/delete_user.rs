use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::ensure_deletable;

pub struct DeleteUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> DeleteUser<'a, R> {
    /// Deleting an unknown `sso` succeeds without touching anything.
    pub async fn execute(&self, sso: &str) -> anyhow::Result<()> {
        ensure_deletable(sso)?;
        let removed = self.repo.delete_user(sso).await?;
        tracing::debug!(target: "users", sso, removed, "delete_user");
        Ok(())
    }
}
