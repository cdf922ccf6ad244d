use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One billing-period water-meter measurement. Immutable once recorded;
/// the charge is computed server-side from the tariff schedule.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MeterReading {
    pub id: String,
    pub member_id: String,
    pub previous_reading: i64,
    pub current_reading: i64,
    pub consumption: i64,
    pub month: i32,
    pub year: i32,
    pub charge: i64,
    pub reading_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl MeterReading {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        member_id: String,
        previous_reading: i64,
        current_reading: i64,
        month: i32,
        year: i32,
        charge: i64,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            previous_reading,
            current_reading,
            consumption: current_reading - previous_reading,
            month,
            year,
            charge,
            reading_date: Utc::now(),
            notes,
        }
    }
}
