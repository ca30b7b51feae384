use crate::error::DbError;
use crate::reservations::ReservationRepository;
use core_types::{Customer, Reservation};
use sqlx::{Row, SqlitePool};

/// The repository owning the persistence lifecycle of `Customer` entities.
///
/// It encapsulates every SQL statement that touches the `customers` table:
/// full-table listing, id lookup, name search, the top-customers ranking
/// and saving. It also composes a `ReservationRepository` (the only
/// dependency between the two repositories) so a customer's reservations
/// can be fetched without the caller wiring both up.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
    reservations: ReservationRepository,
}

impl CustomerRepository {
    /// The ranking size the application asks for when none is given.
    pub const DEFAULT_TOP_LIMIT: i64 = 10;

    /// Creates a new `CustomerRepository` over a shared connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        let reservations = ReservationRepository::new(pool.clone());
        Self { pool, reservations }
    }

    /// Fetches every customer, sorted by last name then first name.
    ///
    /// There is no pagination; this returns the full table. An empty table
    /// yields an empty vec, which is a valid result.
    pub async fn list_all(&self) -> Result<Vec<Customer>, DbError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, first_name, last_name, phone, notes
             FROM customers
             ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Fetches exactly one customer by id.
    ///
    /// Fails with `DbError::NotFound` when no row matches.
    pub async fn get_by_id(&self, id: i64) -> Result<Customer, DbError> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, first_name, last_name, phone, notes
             FROM customers
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        customer.ok_or_else(|| DbError::NotFound(format!("No such customer: {}", id)))
    }

    /// Finds customers whose first or last name equals the searched name.
    ///
    /// Only the first character of the input is capitalized before matching;
    /// the rest is left untouched, so "mcAllister" matches a stored
    /// "McAllister" but a fully lowercased "mcallister" would not. This is a
    /// single-token exact match: no substrings, no multi-word names.
    /// Fails with `DbError::NotFound` (echoing the original input) when
    /// nothing matches.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Customer>, DbError> {
        let capitalized = capitalize_first(name);

        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, first_name, last_name, phone, notes
             FROM customers
             WHERE $1 IN (first_name, last_name)",
        )
        .bind(capitalized)
        .fetch_all(&self.pool)
        .await?;

        if customers.is_empty() {
            return Err(DbError::NotFound(format!(
                "Sorry, your search for {} yielded no results.",
                name
            )));
        }

        Ok(customers)
    }

    /// Ranks customers by how many reservations they hold, most first, and
    /// returns at most `limit` of them.
    ///
    /// The LEFT JOIN keeps customers with zero reservations in the ranking
    /// (counted as 0). Only the id and name columns are selected, so the
    /// returned entities carry no phone or notes. The count itself is not
    /// exposed. Fails with `DbError::EmptyResult` when the ranking is empty,
    /// which includes the degenerate case of an empty customers table.
    pub async fn find_top_customers(&self, limit: i64) -> Result<Vec<Customer>, DbError> {
        tracing::debug!(limit, "Ranking customers by reservation count");

        let customers = sqlx::query_as::<_, Customer>(
            "SELECT COUNT(r.id) AS reservation_count, c.id, c.first_name, c.last_name
             FROM customers AS c
             LEFT JOIN reservations AS r ON c.id = r.customer_id
             GROUP BY c.last_name, c.first_name, c.id
             ORDER BY COUNT(r.id) DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        if customers.is_empty() {
            return Err(DbError::EmptyResult);
        }

        Ok(customers)
    }

    /// Saves a customer: inserts when it has no id yet, updates otherwise.
    ///
    /// The insert path writes the generated id back onto the entity. The
    /// update path overwrites all four mutable fields of the existing row;
    /// there is no partial-field update and no optimistic locking.
    pub async fn save(&self, customer: &mut Customer) -> Result<(), DbError> {
        tracing::debug!(id = ?customer.id, "Saving customer");

        match customer.id {
            None => {
                let row = sqlx::query(
                    "INSERT INTO customers (first_name, last_name, phone, notes)
                     VALUES ($1, $2, $3, $4)
                     RETURNING id",
                )
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(&customer.phone)
                .bind(&customer.notes)
                .fetch_one(&self.pool)
                .await?;

                customer.id = Some(row.get("id"));
            }
            Some(id) => {
                sqlx::query(
                    "UPDATE customers
                     SET first_name = $1, last_name = $2, phone = $3, notes = $4
                     WHERE id = $5",
                )
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(&customer.phone)
                .bind(&customer.notes)
                .bind(id)
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }

    /// Fetches all reservations held by the given customer, eagerly.
    ///
    /// Delegates to the composed `ReservationRepository`. A customer that
    /// has never been saved has no id and therefore no reservations.
    pub async fn reservations_for(
        &self,
        customer: &Customer,
    ) -> Result<Vec<Reservation>, DbError> {
        match customer.id {
            Some(id) => self.reservations.list_for_customer(id).await,
            None => Ok(Vec::new()),
        }
    }
}

/// Uppercases only the first character of `name`, leaving the rest alone.
/// Stored names are capitalized, search input often is not; anything more
/// aggressive (full title-casing) would change matching for mixed-case
/// names like "McAllister".
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
