mod common;

use chrono::{Duration, Utc};
use shortly::domain::entities::NewShortUrl;
use shortly::domain::repositories::UrlRepository;
use shortly::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn repo(pool: PgPool) -> PgUrlRepository {
    PgUrlRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_create_and_find_by_code(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .create(NewShortUrl {
            code: "3D7".to_string(),
            long_url: "https://example.com/".to_string(),
            counter: 12345,
            expires_at: None,
        })
        .await
        .unwrap();

    assert_eq!(created.code, "3D7");
    assert_eq!(created.counter, 12345);
    assert!(created.expires_at.is_none());

    let found = repo.find_by_code("3D7").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.long_url, "https://example.com/");
}

#[sqlx::test]
async fn test_find_by_code_unknown_is_none(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.find_by_code("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_long_url(pool: PgPool) {
    let repo = repo(pool);

    repo.create(NewShortUrl {
        code: "1".to_string(),
        long_url: "https://example.com/a".to_string(),
        counter: 1,
        expires_at: None,
    })
    .await
    .unwrap();

    let found = repo
        .find_by_long_url("https://example.com/a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.code, "1");

    assert!(
        repo.find_by_long_url("https://example.com/b")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_create_persists_expiry(pool: PgPool) {
    let repo = repo(pool);

    let expires_at = Utc::now() + Duration::days(30);
    let created = repo
        .create(NewShortUrl {
            code: "exp1".to_string(),
            long_url: "https://example.com/expiring".to_string(),
            counter: 2,
            expires_at: Some(expires_at),
        })
        .await
        .unwrap();

    let stored = created.expires_at.unwrap();
    assert!((stored - expires_at).num_seconds().abs() < 1);
}

#[sqlx::test]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let repo = repo(pool);

    let new_url = NewShortUrl {
        code: "dup1".to_string(),
        long_url: "https://example.com/first".to_string(),
        counter: 3,
        expires_at: None,
    };
    repo.create(new_url.clone()).await.unwrap();

    let result = repo.create(new_url).await;
    assert!(matches!(
        result.unwrap_err(),
        shortly::AppError::Conflict { .. }
    ));
}

#[sqlx::test]
async fn test_count(pool: PgPool) {
    let repo = repo(pool.clone());

    assert_eq!(repo.count().await.unwrap(), 0);

    common::create_test_url(&pool, "c1", "https://example.com/1", 1).await;
    common::create_test_url(&pool, "c2", "https://example.com/2", 2).await;

    assert_eq!(repo.count().await.unwrap(), 2);
}
