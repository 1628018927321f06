// src/handlers/reservations.rs
// DOCUMENTATION: HTTP handlers for reservations
// PURPOSE: List a guest's reservations

use crate::errors::LightBnbError;
use crate::models::ReservationQuery;
use crate::services::RentalService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /api/reservations/{guest_id}
pub async fn guest_reservations(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    query: web::Query<ReservationQuery>,
) -> Result<impl Responder, LightBnbError> {
    let reservations =
        RentalService::guest_reservations(pool.get_ref(), path.into_inner(), query.limit).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "reservations": reservations })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reservations").route("/{guest_id}", web::get().to(guest_reservations)),
    );
}
