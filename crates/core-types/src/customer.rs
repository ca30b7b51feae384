use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer of the restaurant.
///
/// Maps one-to-one with a row of the `customers` table. A freshly
/// constructed customer has no `id`; the database assigns one the first
/// time it is saved, and the id is immutable from then on. All other
/// fields are mutable and rewritten in full on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    // The top-customers ranking selects only id and the name columns, so
    // these two must tolerate being absent from a row.
    #[sqlx(default)]
    pub phone: Option<String>,
    #[sqlx(default)]
    pub notes: Option<String>,
}

impl Customer {
    /// Creates a not-yet-persisted customer from user-supplied fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone,
            notes,
        }
    }

    /// The customer's full name: first and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
