//! Expense record rows and their projection onto the shared wire type.

#[cfg(feature = "server")]
use chrono::{DateTime, NaiveDateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full expense record row from the `records` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct RecordRow {
    pub id: Uuid,
    pub couple_id: Uuid,
    pub author_id: Uuid,
    pub place_name: String,
    pub visited_at: NaiveDateTime,
    pub menus: Vec<String>,
    pub amount: i64,
    pub category: String,
    pub score: i16,
    pub is_dutch: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl RecordRow {
    /// Convert to the shared record type for client consumption.
    pub fn to_record(&self) -> model::Record {
        model::Record {
            id: self.id.to_string(),
            place_name: self.place_name.clone(),
            visited_at: self.visited_at,
            menus: self.menus.clone(),
            amount: self.amount,
            category: self.category.clone(),
            score: self.score.clamp(0, 5) as u8,
            is_dutch: self.is_dutch,
        }
    }
}
