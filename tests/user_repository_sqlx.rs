//! Postgres-backed tests for the user repository.
//!
//! Each test gets a fresh database from `#[sqlx::test]`, so they need a
//! reachable server in `DATABASE_URL`. Run with `cargo test -- --ignored`.

use sqlx::PgPool;

use user_store::application::ports::user_repository::UserRepository;
use user_store::application::use_cases::users::create_user::{CreateOutcome, CreateUser};
use user_store::application::use_cases::users::delete_user::DeleteUser;
use user_store::application::use_cases::users::list_users::ListUsers;
use user_store::application::use_cases::users::set_agree::SetAgree;
use user_store::domain::users::user::{User, UserError};
use user_store::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;

fn user(sso: &str, role: &str, agree: bool) -> User {
    User {
        sso: sso.into(),
        role: role.into(),
        agree,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn create_then_list(pool: PgPool) {
    let repo = SqlxUserRepository::new(pool);

    let outcome = CreateUser { repo: &repo }
        .execute("u1", "member")
        .await
        .unwrap();
    assert_eq!(outcome, CreateOutcome::Created);

    let users = ListUsers { repo: &repo }.execute().await.unwrap();
    assert_eq!(users, vec![user("u1", "member", false)]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn duplicate_create_keeps_first_row(pool: PgPool) {
    let repo = SqlxUserRepository::new(pool);
    let create = CreateUser { repo: &repo };

    create.execute("u1", "member").await.unwrap();
    let outcome = create.execute("u1", "admin").await.unwrap();
    assert_eq!(outcome, CreateOutcome::AlreadyExists);

    let users = repo.list_users().await.unwrap();
    assert_eq!(users, vec![user("u1", "member", false)]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn protected_users_survive_delete(pool: PgPool) {
    let repo = SqlxUserRepository::new(pool);
    repo.create_user("ADMIN", "admin").await.unwrap();

    for sso in ["ADMIN", "FXX_USER"] {
        let err = DeleteUser { repo: &repo }.execute(sso).await.unwrap_err();
        assert!(err.downcast_ref::<UserError>().is_some());
    }

    let users = repo.list_users().await.unwrap();
    assert_eq!(users, vec![user("ADMIN", "admin", false)]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn delete_missing_user_leaves_table_unchanged(pool: PgPool) {
    let repo = SqlxUserRepository::new(pool);
    repo.create_user("u1", "member").await.unwrap();

    DeleteUser { repo: &repo }.execute("ghost").await.unwrap();
    assert!(!repo.delete_user("ghost").await.unwrap());

    let users = repo.list_users().await.unwrap();
    assert_eq!(users, vec![user("u1", "member", false)]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn set_agree_is_idempotent(pool: PgPool) {
    let repo = SqlxUserRepository::new(pool);
    repo.create_user("u1", "member").await.unwrap();
    let agree = SetAgree { repo: &repo };

    agree.execute("u1").await.unwrap();
    agree.execute("u1").await.unwrap();
    agree.execute("ghost").await.unwrap();

    let users = repo.list_users().await.unwrap();
    assert_eq!(users, vec![user("u1", "member", true)]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn full_lifecycle(pool: PgPool) {
    let repo = SqlxUserRepository::new(pool);
    let list = ListUsers { repo: &repo };
    assert!(list.execute().await.unwrap().is_empty());

    CreateUser { repo: &repo }
        .execute("u1", "member")
        .await
        .unwrap();
    assert_eq!(
        list.execute().await.unwrap(),
        vec![user("u1", "member", false)]
    );

    SetAgree { repo: &repo }.execute("u1").await.unwrap();
    assert_eq!(
        list.execute().await.unwrap(),
        vec![user("u1", "member", true)]
    );

    DeleteUser { repo: &repo }.execute("u1").await.unwrap();
    assert!(list.execute().await.unwrap().is_empty());
}
