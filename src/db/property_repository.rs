// src/db/property_repository.rs
// DOCUMENTATION: Property database operations
// PURPOSE: Filtered listing search and property inserts

use crate::db::{absent_on_error, InsertRecord, PropertySearchQuery};
use crate::errors::LightBnbError;
use crate::models::{Property, PropertyColumn, PropertyListing, PropertySearchOptions};
use sqlx::PgPool;

pub struct PropertyRepository;

impl PropertyRepository {
    /// Properties matching `options`, cheapest first, at most `limit` rows
    /// DOCUMENTATION: Each row carries the average rating of its reviews.
    /// None when the query fails.
    pub async fn get_all_properties(
        pool: &PgPool,
        options: &PropertySearchOptions,
        limit: i64,
    ) -> Option<Vec<PropertyListing>> {
        absent_on_error(
            "get_all_properties",
            Self::try_get_all_properties(pool, options, limit).await,
        )
    }

    /// Insert the supplied columns, returning the first inserted row
    /// DOCUMENTATION: None when the insert fails or returns nothing
    pub async fn add_property(
        pool: &PgPool,
        property: &InsertRecord<PropertyColumn>,
    ) -> Option<Property> {
        absent_on_error("add_property", Self::try_add_property(pool, property).await).flatten()
    }

    async fn try_get_all_properties(
        pool: &PgPool,
        options: &PropertySearchOptions,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, LightBnbError> {
        let statement = PropertySearchQuery::build(options, limit);

        log::info!("Executing property search: {}", statement.sql);

        let listings = statement
            .query_as::<PropertyListing>()
            .fetch_all(pool)
            .await?;

        log::info!("Property search returned {} listing(s)", listings.len());
        Ok(listings)
    }

    async fn try_add_property(
        pool: &PgPool,
        property: &InsertRecord<PropertyColumn>,
    ) -> Result<Option<Property>, LightBnbError> {
        let statement = property.to_statement()?;

        log::debug!(
            "Inserting property with {} column(s): {}",
            property.len(),
            statement.sql
        );

        let inserted = statement
            .query_as::<Property>()
            .fetch_optional(pool)
            .await?;

        if let Some(p) = &inserted {
            log::info!("Created property with id: {}", p.id);
        }
        Ok(inserted)
    }
}
