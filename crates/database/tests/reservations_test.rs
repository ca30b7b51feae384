//! Integration tests for `ReservationRepository`, run against in-memory
//! SQLite databases with the real schema migrations applied.

use chrono::{TimeZone, Utc};
use core_types::{Customer, Reservation};
use database::{run_migrations, CustomerRepository, DbError, ReservationRepository};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// One connection so every query sees the same in-memory database.
async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    run_migrations(&pool).await.expect("migrations failed");
    pool
}

async fn insert_customer(pool: &SqlitePool) -> i64 {
    let repo = CustomerRepository::new(pool.clone());
    let mut customer = Customer::new("Maria", "Santos", None, None);
    repo.save(&mut customer).await.expect("save failed");
    customer.id.unwrap()
}

#[tokio::test]
async fn list_for_customer_with_no_reservations_is_empty_not_an_error() {
    let pool = setup_pool().await;
    let customer_id = insert_customer(&pool).await;
    let repo = ReservationRepository::new(pool);

    let reservations = repo.list_for_customer(customer_id).await.unwrap();
    assert!(reservations.is_empty());
}

#[tokio::test]
async fn saved_fields_round_trip_through_the_database() {
    let pool = setup_pool().await;
    let customer_id = insert_customer(&pool).await;
    let repo = ReservationRepository::new(pool);

    let start_at = Utc.with_ymd_and_hms(2024, 6, 3, 13, 30, 0).unwrap();
    let reservation = Reservation::new(
        customer_id,
        4,
        start_at,
        Some("window seat".to_string()),
    );
    repo.save(&reservation).await.unwrap();

    let listed = repo.list_for_customer(customer_id).await.unwrap();
    assert_eq!(listed.len(), 1);

    // Everything but the id (which save never reads back) comes back equal.
    assert_eq!(listed[0].customer_id, customer_id);
    assert_eq!(listed[0].num_guests, 4);
    assert_eq!(listed[0].start_at, start_at);
    assert_eq!(listed[0].notes.as_deref(), Some("window seat"));
    assert!(listed[0].id.is_some());
}

#[tokio::test]
async fn save_is_append_only_and_never_reads_the_id_back() {
    let pool = setup_pool().await;
    let customer_id = insert_customer(&pool).await;
    let repo = ReservationRepository::new(pool);

    let start_at = Utc.with_ymd_and_hms(2024, 8, 1, 18, 0, 0).unwrap();
    let reservation = Reservation::new(customer_id, 2, start_at, None);

    // Two saves of the same entity mean two rows; there is no update path.
    repo.save(&reservation).await.unwrap();
    repo.save(&reservation).await.unwrap();

    let listed = repo.list_for_customer(customer_id).await.unwrap();
    assert_eq!(listed.len(), 2);

    // The entity was not mutated: its id is still unset even though both
    // stored rows have one.
    assert_eq!(reservation.id, None);
    assert!(listed.iter().all(|r| r.id.is_some()));
}

#[tokio::test]
async fn save_ignores_a_preset_id_and_still_inserts() {
    let pool = setup_pool().await;
    let customer_id = insert_customer(&pool).await;
    let repo = ReservationRepository::new(pool);

    let start_at = Utc.with_ymd_and_hms(2024, 8, 2, 18, 0, 0).unwrap();
    let reservation = Reservation {
        id: Some(4242),
        customer_id,
        num_guests: 3,
        start_at,
        notes: None,
    };
    repo.save(&reservation).await.unwrap();

    let listed = repo.list_for_customer(customer_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    // The database assigned its own id; the preset one went nowhere.
    assert_ne!(listed[0].id, Some(4242));
}

#[tokio::test]
async fn save_rejects_a_partyless_reservation() {
    let pool = setup_pool().await;
    let customer_id = insert_customer(&pool).await;
    let repo = ReservationRepository::new(pool);

    let start_at = Utc.with_ymd_and_hms(2024, 9, 9, 9, 0, 0).unwrap();
    let reservation = Reservation::new(customer_id, 0, start_at, None);

    let err = repo.save(&reservation).await.unwrap_err();
    assert!(matches!(err, DbError::Validation(_)));
    assert!(err.to_string().contains("at least one guest"));

    // Nothing was inserted.
    let listed = repo.list_for_customer(customer_id).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn foreign_key_violations_surface_as_storage_errors() {
    let pool = setup_pool().await;
    let repo = ReservationRepository::new(pool);

    let start_at = Utc.with_ymd_and_hms(2024, 10, 31, 21, 0, 0).unwrap();
    let orphan = Reservation::new(9999, 2, start_at, None);

    // No such customer row: the constraint failure propagates unchanged.
    let err = repo.save(&orphan).await.unwrap_err();
    assert!(matches!(err, DbError::QueryError(_)));
}
