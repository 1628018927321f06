// src/services/rental_service.rs
// DOCUMENTATION: Business logic between handlers and repositories
// PURPOSE: Validate input and turn absent repository results into HTTP errors

use crate::db::{
    InsertRecord, PropertyRepository, ReservationRepository, UserRepository, DEFAULT_LIMIT,
};
use crate::errors::LightBnbError;
use crate::models::{
    NewUser, Property, PropertyColumn, PropertyListing, PropertySearchOptions,
    PropertySearchParams, Reservation, UserResponse,
};
use serde_json::{Map, Value};
use sqlx::PgPool;
use validator::Validate;

pub struct RentalService;

impl RentalService {
    /// Search listings (GET /api/properties)
    pub async fn search_properties(
        pool: &PgPool,
        params: PropertySearchParams,
    ) -> Result<Vec<PropertyListing>, LightBnbError> {
        let limit = resolve_limit(params.limit)?;
        check_finite(&params.options)?;

        PropertyRepository::get_all_properties(pool, &params.options, limit)
            .await
            .ok_or_else(|| LightBnbError::DatabaseError("property search failed".to_string()))
    }

    /// Create a property from a JSON object of column values
    pub async fn create_property(
        pool: &PgPool,
        body: Map<String, Value>,
    ) -> Result<Property, LightBnbError> {
        let record = InsertRecord::<PropertyColumn>::from_json(&body)?;

        PropertyRepository::add_property(pool, &record)
            .await
            .ok_or_else(|| {
                LightBnbError::DatabaseError("property could not be created".to_string())
            })
    }

    /// Reservations made by a guest
    pub async fn guest_reservations(
        pool: &PgPool,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<Reservation>, LightBnbError> {
        let limit = resolve_limit(limit)?;

        ReservationRepository::get_all_reservations(pool, guest_id, limit)
            .await
            .ok_or_else(|| {
                LightBnbError::DatabaseError("reservation lookup failed".to_string())
            })
    }

    /// Register a user
    pub async fn register_user(
        pool: &PgPool,
        user: NewUser,
    ) -> Result<Vec<UserResponse>, LightBnbError> {
        user.validate()
            .map_err(|e| LightBnbError::ValidationError(e.to_string()))?;

        let users = UserRepository::add_user(pool, &user)
            .await
            .ok_or_else(|| LightBnbError::DatabaseError("user could not be created".to_string()))?;

        Ok(users.iter().map(|u| u.to_response()).collect())
    }

    /// Users matching an id
    pub async fn users_with_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Vec<UserResponse>, LightBnbError> {
        let users = UserRepository::get_user_with_id(pool, id)
            .await
            .ok_or_else(|| LightBnbError::DatabaseError("user lookup failed".to_string()))?;

        Ok(users.iter().map(|u| u.to_response()).collect())
    }

    /// User with an email
    /// DOCUMENTATION: A failed query is reported as NotFound, the repository
    /// does not tell the two apart
    pub async fn user_with_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<UserResponse, LightBnbError> {
        UserRepository::get_user_with_email(pool, email)
            .await
            .map(|u| u.to_response())
            .ok_or_else(|| LightBnbError::NotFound(format!("user with email {}", email)))
    }
}

fn resolve_limit(limit: Option<i64>) -> Result<i64, LightBnbError> {
    match limit {
        None => Ok(DEFAULT_LIMIT),
        Some(n) if n >= 1 => Ok(n),
        Some(n) => Err(LightBnbError::InvalidInput(format!(
            "limit must be at least 1, got {}",
            n
        ))),
    }
}

// NaN and inf parse as f64 but would turn into a meaningless cents filter
fn check_finite(options: &PropertySearchOptions) -> Result<(), LightBnbError> {
    let numbers = [
        ("minimum_price_per_night", options.minimum_price_per_night),
        ("maximum_price_per_night", options.maximum_price_per_night),
        ("minimum_rating", options.minimum_rating),
    ];

    for (name, value) in numbers {
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(LightBnbError::InvalidInput(format!(
                "{} must be a finite number, got {}",
                name, v
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::unreachable_pool;
    use serde_json::json;

    #[test]
    fn test_resolve_limit() {
        assert_eq!(resolve_limit(None).unwrap(), 10);
        assert_eq!(resolve_limit(Some(25)).unwrap(), 25);
        assert!(resolve_limit(Some(0)).is_err());
        assert!(resolve_limit(Some(-3)).is_err());
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite(&PropertySearchOptions::default()).is_ok());
        assert!(check_finite(&PropertySearchOptions {
            minimum_price_per_night: Some(10.0),
            minimum_rating: Some(4.5),
            ..Default::default()
        })
        .is_ok());

        let err = check_finite(&PropertySearchOptions {
            maximum_price_per_night: Some(f64::INFINITY),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("maximum_price_per_night"));
    }

    #[tokio::test]
    async fn test_nan_price_rejected_before_query() {
        let pool = unreachable_pool();
        let params = PropertySearchParams {
            options: PropertySearchOptions {
                minimum_price_per_night: Some(f64::NAN),
                ..Default::default()
            },
            limit: None,
        };

        let err = RentalService::search_properties(&pool, params)
            .await
            .unwrap_err();
        assert!(matches!(err, LightBnbError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unknown_property_column_fails_before_query() {
        let pool = unreachable_pool();
        let body = match json!({ "title": "Cabin", "colour": "red" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let err = RentalService::create_property(&pool, body).await.unwrap_err();
        assert!(matches!(err, LightBnbError::UnknownColumn(_)));
    }

    #[tokio::test]
    async fn test_invalid_user_rejected_before_query() {
        let pool = unreachable_pool();
        let user = NewUser {
            name: "Eva".to_string(),
            email: "nope".to_string(),
            password: "x".to_string(),
        };

        let err = RentalService::register_user(&pool, user).await.unwrap_err();
        assert!(matches!(err, LightBnbError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_failed_search_surfaces_database_error() {
        let pool = unreachable_pool();
        let params = PropertySearchParams {
            options: PropertySearchOptions::default(),
            limit: None,
        };

        let err = RentalService::search_properties(&pool, params)
            .await
            .unwrap_err();
        assert!(matches!(err, LightBnbError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_missing_email_is_not_found() {
        let pool = unreachable_pool();

        let err = RentalService::user_with_email(&pool, "missing@x.com")
            .await
            .unwrap_err();
        assert!(matches!(err, LightBnbError::NotFound(_)));
    }
}
