use crate::error::DbError;
use core_types::Reservation;
use sqlx::SqlitePool;

/// The repository owning the persistence lifecycle of `Reservation` entities.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: SqlitePool,
}

impl ReservationRepository {
    /// Creates a new `ReservationRepository` over a shared connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetches all reservations belonging to the given customer, in
    /// database-default order.
    ///
    /// A customer with no reservations yields an empty vec, which is a
    /// valid outcome rather than an error.
    pub async fn list_for_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Reservation>, DbError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT id, customer_id, num_guests, start_at, notes
             FROM reservations
             WHERE customer_id = $1",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    /// Saves a reservation. Always an insert: reservations are append-only
    /// and have no update path. The generated id is not read back, so the
    /// passed entity keeps whatever id it had (normally none).
    ///
    /// Fails with `DbError::Validation` before issuing any SQL when the
    /// party size is not at least one guest; a violated foreign key on
    /// `customer_id` surfaces from storage unchanged.
    pub async fn save(&self, reservation: &Reservation) -> Result<(), DbError> {
        if reservation.num_guests < 1 {
            return Err(DbError::Validation(format!(
                "A reservation must seat at least one guest, got {}",
                reservation.num_guests
            )));
        }

        tracing::debug!(customer_id = reservation.customer_id, "Saving reservation");

        sqlx::query(
            "INSERT INTO reservations (customer_id, num_guests, start_at, notes)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(reservation.customer_id)
        .bind(reservation.num_guests)
        .bind(reservation.start_at)
        .bind(&reservation.notes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
