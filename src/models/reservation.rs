// src/models/reservation.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the reservations table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
}

/// Query string of GET /api/reservations/{guest_id}
#[derive(Debug, Deserialize)]
pub struct ReservationQuery {
    pub limit: Option<i64>,
}
