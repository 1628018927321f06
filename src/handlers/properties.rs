// src/handlers/properties.rs
// DOCUMENTATION: HTTP handlers for property listings
// PURPOSE: Parse requests, call services, return responses

use crate::errors::LightBnbError;
use crate::models::PropertySearchParams;
use crate::services::RentalService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::{Map, Value};
use sqlx::PgPool;

/// GET /api/properties
/// Search listings by city, owner, price range and minimum rating
pub async fn search_properties(
    pool: web::Data<PgPool>,
    query: web::Query<PropertySearchParams>,
) -> Result<impl Responder, LightBnbError> {
    let properties = RentalService::search_properties(pool.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "properties": properties })))
}

/// POST /api/properties
/// Create a property from a JSON object of column values
pub async fn create_property(
    pool: web::Data<PgPool>,
    body: web::Json<Map<String, Value>>,
) -> Result<impl Responder, LightBnbError> {
    let property = RentalService::create_property(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(property))
}

/// Configuration for property routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/properties")
            .route("", web::get().to(search_properties))
            .route("", web::post().to(create_property)),
    );
}
