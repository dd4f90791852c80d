//! Database integration tests.
//!
//! These tests require a running `PostgreSQL` instance.
//! Run with: `cargo test --test db_integration -- --ignored`
//!
//! Environment variables:
//!   `TEST_DB_HOST` (default: localhost)
//!   `TEST_DB_PORT` (default: 5433)
//!   `TEST_DB_USER` (default: `bookery_test`)
//!   `TEST_DB_PASSWORD` (default: `bookery_test`)
//!   `TEST_DB_NAME` (default: `bookery_test`)

#![allow(clippy::unwrap_used)]

use bookery_db::entities::{
    book, book_like, cart, cart_item, notification, review, user, user_profile, Book, BookLike,
    Cart, CartItem, Notification, Review, UserProfile,
};
use bookery_db::migrations::Migrator;
use bookery_db::test_utils::{TestDatabase, TestDbConfig};
use sea_orm::prelude::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, EntityTrait, ModelTrait, NotSet, Set,
    Statement,
};
use sea_orm_migration::MigratorTrait;

#[test]
fn test_config_from_env() {
    // Test that default config is valid
    let config = TestDbConfig::default();
    assert!(!config.host.is_empty());
    assert!(config.port > 0);
    assert!(!config.username.is_empty());
    assert!(config.database_url().starts_with("postgres://"));
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_database_connection() {
    let config = TestDbConfig::default();
    let result = TestDatabase::with_config(config).await;
    assert!(result.is_ok(), "Failed to connect: {:?}", result.err());
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_cleanup_truncates_but_keeps_schema() {
    let db = TestDatabase::create_unique().await.unwrap();
    Migrator::up(db.connection(), None).await.unwrap();

    seed_user(&db, "alice").await;
    db.cleanup().await.unwrap();

    assert_eq!(
        bookery_db::entities::User::find()
            .all(db.connection())
            .await
            .unwrap()
            .len(),
        0
    );
    // Migration state survives, so up() remains a no-op
    Migrator::up(db.connection(), None).await.unwrap();

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_migrations_apply_and_reapply() {
    let db = TestDatabase::create_unique().await.unwrap();

    Migrator::up(db.connection(), None).await.unwrap();

    // All declared tables exist
    let tables = db
        .connection()
        .query_all(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT tablename FROM pg_tables WHERE schemaname = 'public'".to_string(),
        ))
        .await
        .unwrap();

    let names: Vec<String> = tables
        .iter()
        .filter_map(|row| row.try_get::<String>("", "tablename").ok())
        .collect();

    for expected in [
        "user",
        "user_profile",
        "book",
        "cart",
        "cart_item",
        "comment",
        "follow",
        "book_like",
        "notification",
        "order",
        "order_item",
        "review",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing table {expected}");
    }

    // Re-applying is a no-op thanks to migration-state tracking
    Migrator::up(db.connection(), None).await.unwrap();

    db.drop_database().await.unwrap();
}

async fn seed_user(db: &TestDatabase, username: &str) -> user::Model {
    user::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        password_hash: Set("hash".to_string()),
        is_active: Set(true),
        is_staff: Set(false),
        last_login: Set(None),
        joined_on: Set(chrono::Utc::now().into()),
    }
    .insert(db.connection())
    .await
    .unwrap()
}

async fn seed_profile(db: &TestDatabase, user_id: i64) -> user_profile::Model {
    user_profile::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        email: Set(None),
        first_name: Set(None),
        last_name: Set(None),
        profile_picture: Set(None),
    }
    .insert(db.connection())
    .await
    .unwrap()
}

async fn seed_book(db: &TestDatabase, owner_id: i64, posted_by_id: i64) -> book::Model {
    book::ActiveModel {
        id: NotSet,
        title: Set("The Dispossessed".to_string()),
        author: Set("Ursula K. Le Guin".to_string()),
        genre: Set("sci-fi".to_string()),
        description: Set("An ambiguous utopia.".to_string()),
        posted_on: Set(chrono::Utc::now().into()),
        book_cover: Set("covers/dispossessed.jpg".to_string()),
        price: Set(Decimal::new(1999, 2)),
        owner_id: Set(owner_id),
        posted_by_id: Set(posted_by_id),
    }
    .insert(db.connection())
    .await
    .unwrap()
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_deleting_user_cascades_to_dependents() {
    let db = TestDatabase::create_unique().await.unwrap();
    Migrator::up(db.connection(), None).await.unwrap();

    let user = seed_user(&db, "alice").await;
    let profile = seed_profile(&db, user.id).await;
    seed_book(&db, profile.id, user.id).await;

    cart::ActiveModel {
        id: NotSet,
        user_id: Set(user.id),
    }
    .insert(db.connection())
    .await
    .unwrap();

    notification::ActiveModel {
        id: NotSet,
        message: Set("welcome".to_string()),
        is_read: Set(false),
        created_on: Set(chrono::Utc::now().into()),
        user_id: Set(user.id),
    }
    .insert(db.connection())
    .await
    .unwrap();

    user.delete(db.connection()).await.unwrap();

    assert_eq!(UserProfile::find().all(db.connection()).await.unwrap().len(), 0);
    assert_eq!(Cart::find().all(db.connection()).await.unwrap().len(), 0);
    assert_eq!(Notification::find().all(db.connection()).await.unwrap().len(), 0);
    // The book goes too: its owner profile was cascade-deleted
    assert_eq!(Book::find().all(db.connection()).await.unwrap().len(), 0);

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_deleting_book_cascades_to_dependents() {
    let db = TestDatabase::create_unique().await.unwrap();
    Migrator::up(db.connection(), None).await.unwrap();

    let seller = seed_user(&db, "alice").await;
    let profile = seed_profile(&db, seller.id).await;
    let reader = seed_user(&db, "bob").await;
    let book = seed_book(&db, profile.id, seller.id).await;

    book_like::ActiveModel {
        id: NotSet,
        book_id: Set(book.id),
        user_id: Set(reader.id),
    }
    .insert(db.connection())
    .await
    .unwrap();

    review::ActiveModel {
        id: NotSet,
        review: Set("Couldn't put it down.".to_string()),
        rating: Set(5),
        book_id: Set(book.id),
        reviewer_id: Set(reader.id),
    }
    .insert(db.connection())
    .await
    .unwrap();

    book.delete(db.connection()).await.unwrap();

    assert_eq!(BookLike::find().all(db.connection()).await.unwrap().len(), 0);
    assert_eq!(Review::find().all(db.connection()).await.unwrap().len(), 0);
    // Users are untouched
    assert_eq!(
        bookery_db::entities::User::find()
            .all(db.connection())
            .await
            .unwrap()
            .len(),
        2
    );

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_cart_books_through_cart_item() {
    let db = TestDatabase::create_unique().await.unwrap();
    Migrator::up(db.connection(), None).await.unwrap();

    let seller = seed_user(&db, "alice").await;
    let profile = seed_profile(&db, seller.id).await;
    let buyer = seed_user(&db, "bob").await;
    let book = seed_book(&db, profile.id, seller.id).await;

    let cart = cart::ActiveModel {
        id: NotSet,
        user_id: Set(buyer.id),
    }
    .insert(db.connection())
    .await
    .unwrap();

    cart_item::ActiveModel {
        id: NotSet,
        quantity: Set(2),
        book_id: Set(book.id),
        cart_id: Set(cart.id),
    }
    .insert(db.connection())
    .await
    .unwrap();

    // The many-to-many goes through the join entity
    let books = cart.find_related(Book).all(db.connection()).await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, book.id);

    let items = CartItem::find().all(db.connection()).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_migrations_roll_back() {
    let db = TestDatabase::create_unique().await.unwrap();

    Migrator::up(db.connection(), None).await.unwrap();
    Migrator::down(db.connection(), None).await.unwrap();

    let tables = db
        .connection()
        .query_all(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT tablename FROM pg_tables WHERE schemaname = 'public' \
             AND tablename <> 'seaql_migrations'"
                .to_string(),
        ))
        .await
        .unwrap();

    assert!(tables.is_empty(), "tables left behind: {tables:?}");

    db.drop_database().await.unwrap();
}
