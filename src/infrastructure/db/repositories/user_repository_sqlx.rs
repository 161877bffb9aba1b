use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query(r#"SELECT sso, role, agree FROM "user""#)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(rows
            .into_iter()
            .map(|r| User {
                sso: r.get("sso"),
                role: r.get("role"),
                agree: r.get("agree"),
            })
            .collect())
    }

    async fn create_user(&self, sso: &str, role: &str) -> anyhow::Result<bool> {
        // The primary key on sso decides "already exists" atomically.
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query(
            r#"INSERT INTO "user" (sso, role) VALUES ($1, $2)
               ON CONFLICT (sso) DO NOTHING"#,
        )
        .bind(sso)
        .bind(role)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(res.rows_affected() > 0)
    }

    async fn delete_user(&self, sso: &str) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query(r#"DELETE FROM "user" WHERE sso = $1"#)
            .bind(sso)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(res.rows_affected() > 0)
    }

    async fn set_agree(&self, sso: &str) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query(r#"UPDATE "user" SET agree = TRUE WHERE sso = $1"#)
            .bind(sso)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(res.rows_affected() > 0)
    }
}
