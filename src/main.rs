use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use user_store::application::use_cases::users::list_users::ListUsers;
use user_store::bootstrap::app_context::{AppContext, AppServices};
use user_store::bootstrap::config::Config;
use user_store::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "user_store=debug,users=info,sqlx=warn".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        max_connections = cfg.database_max_connections,
        production = cfg.is_production,
        "Starting user store"
    );

    // Database
    let pool = user_store::infrastructure::db::connect_pool(
        &cfg.database_url,
        cfg.database_max_connections,
    )
    .await?;
    user_store::infrastructure::db::migrate(&pool).await?;

    let ctx = AppContext::new(
        cfg,
        AppServices::new(Arc::new(SqlxUserRepository::new(pool.clone()))),
    );

    let repo = ctx.user_repo();
    let users = ListUsers {
        repo: repo.as_ref(),
    }
    .execute()
    .await?;
    info!(count = users.len(), "user table ready");

    pool.close().await;
    Ok(())
}
