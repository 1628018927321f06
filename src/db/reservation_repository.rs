// src/db/reservation_repository.rs
// DOCUMENTATION: Reservation database operations
// PURPOSE: List the reservations made by one guest

use crate::db::{absent_on_error, BindValue, Statement};
use crate::errors::LightBnbError;
use crate::models::Reservation;
use sqlx::PgPool;

pub struct ReservationRepository;

impl ReservationRepository {
    /// Reservations of `guest_id`, at most `limit` rows
    /// DOCUMENTATION: None when the query fails; an empty Vec when the guest has none
    pub async fn get_all_reservations(
        pool: &PgPool,
        guest_id: i32,
        limit: i64,
    ) -> Option<Vec<Reservation>> {
        absent_on_error(
            "get_all_reservations",
            Self::try_get_all_reservations(pool, guest_id, limit).await,
        )
    }

    async fn try_get_all_reservations(
        pool: &PgPool,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<Reservation>, LightBnbError> {
        let statement = reservations_statement(guest_id, limit);
        let reservations = statement
            .query_as::<Reservation>()
            .fetch_all(pool)
            .await?;

        log::debug!(
            "Fetched {} reservation(s) for guest {}",
            reservations.len(),
            guest_id
        );
        Ok(reservations)
    }
}

fn reservations_statement(guest_id: i32, limit: i64) -> Statement {
    Statement::new(
        "SELECT * FROM reservations\nWHERE guest_id = $1\nLIMIT $2",
        vec![BindValue::from(guest_id), BindValue::from(limit)],
    )
}
