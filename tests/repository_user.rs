//! PostgreSQL repository tests.
//!
//! Each test gets a fresh database with `migrations/` applied. They need a
//! running PostgreSQL reachable through `DATABASE_URL`:
//!
//! ```bash
//! cargo test --test repository_user -- --ignored
//! ```

mod common;

use sqlx::PgPool;
use std::sync::Arc;
use user_api::domain::entities::NewUser;
use user_api::domain::repositories::UserRepository;
use user_api::infrastructure::persistence::PgUserRepository;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_assigns_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let first = repo.save(common::new_user("Jane")).await.unwrap();
    let second = repo.save(common::new_user("John")).await.unwrap();

    assert!(first.id > 0);
    assert_ne!(first.id, second.id);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_then_find_round_trip(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let input = common::new_user("Jane");
    let saved = repo.save(input.clone()).await.unwrap();

    let found = repo.find_by_id(saved.id).await.unwrap().unwrap();

    assert_eq!(found, input.into_user(saved.id));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_absent(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let found = repo.find_by_id(999_999).await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_with_id_replaces_row(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let saved = repo.save(common::new_user("Jane")).await.unwrap();

    let replacement = NewUser {
        id: Some(saved.id),
        password: None,
        ..common::new_user("Janet")
    };
    repo.save(replacement).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].first_name, "Janet");
    assert!(all[0].password.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_upsert_unknown_id_then_generate(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let upserted = repo
        .save(NewUser {
            id: Some(100),
            ..common::new_user("Jane")
        })
        .await
        .unwrap();
    let generated = repo.save(common::new_user("John")).await.unwrap();

    assert_eq!(upserted.id, 100);
    assert!(generated.id > 100);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_upsert_below_max_does_not_reuse_deleted_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let mut ids = Vec::new();
    for name in ["Anna", "Bert", "Cleo"] {
        ids.push(repo.save(common::new_user(name)).await.unwrap().id);
    }
    repo.delete_by_id(ids[2]).await.unwrap();
    repo.save(NewUser {
        id: Some(ids[0]),
        ..common::new_user("Anne")
    })
    .await
    .unwrap();

    let generated = repo.save(common::new_user("Dirk")).await.unwrap();

    assert!(generated.id > ids[2]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_is_idempotent(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let saved = repo.save(common::new_user("Jane")).await.unwrap();

    assert!(repo.delete_by_id(saved.id).await.is_ok());
    assert!(repo.delete_by_id(saved.id).await.is_ok());
    assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_after_deletes(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let mut ids = Vec::new();
    for name in ["Anna", "Bert", "Cleo"] {
        ids.push(repo.save(common::new_user(name)).await.unwrap().id);
    }
    repo.delete_by_id(ids[1]).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].first_name, "Anna");
    assert_eq!(all[1].first_name, "Cleo");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
