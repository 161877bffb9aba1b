use crate::application::ports::user_repository::UserRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

pub struct CreateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> CreateUser<'a, R> {
    pub async fn execute(&self, sso: &str, role: &str) -> anyhow::Result<CreateOutcome> {
        if self.repo.create_user(sso, role).await? {
            tracing::info!(target: "users", sso, role, "user inserted");
            Ok(CreateOutcome::Created)
        } else {
            tracing::info!(target: "users", sso, "User is already created in the system.");
            Ok(CreateOutcome::AlreadyExists)
        }
    }
}
