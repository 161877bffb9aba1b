use crate::application::ports::user_repository::UserRepository;

pub struct SetAgree<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> SetAgree<'a, R> {
    pub async fn execute(&self, sso: &str) -> anyhow::Result<()> {
        let updated = self.repo.set_agree(sso).await?;
        tracing::debug!(target: "users", sso, updated, "set_agree");
        Ok(())
    }
}
