// src/models/property.rs
// DOCUMENTATION: Property listings and the search options that filter them
// PURPOSE: Row types for properties/property_reviews and the insertable column set

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use crate::db::{Column, ColumnKind};

/// A row of the properties table
/// DOCUMENTATION: cost_per_night is stored in cents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Property joined with the average rating of its property_reviews rows
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub property: Property,

    pub average_rating: Option<f64>,
}

/// Filters for the property search
/// DOCUMENTATION: Parsed from the GET /api/properties query string.
/// Blank form fields arrive as empty strings and are treated as absent,
/// as are zero prices and ratings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySearchOptions {
    /// Partial, case-insensitive match on city
    #[serde(default, deserialize_with = "blank_as_none")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub owner_id: Option<i64>,

    /// In dollars; compared against cost_per_night in cents
    #[serde(default, deserialize_with = "blank_as_none")]
    pub minimum_price_per_night: Option<f64>,

    /// In dollars; compared against cost_per_night in cents
    #[serde(default, deserialize_with = "blank_as_none")]
    pub maximum_price_per_night: Option<f64>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub minimum_rating: Option<f64>,
}

/// Query string of GET /api/properties: the filters plus a result limit
#[derive(Debug, Deserialize)]
pub struct PropertySearchParams {
    #[serde(flatten)]
    pub options: PropertySearchOptions,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<i64>,
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Columns a caller may supply when inserting a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyColumn {
    OwnerId,
    Title,
    Description,
    ThumbnailPhotoUrl,
    CoverPhotoUrl,
    CostPerNight,
    ParkingSpaces,
    NumberOfBathrooms,
    NumberOfBedrooms,
    Country,
    Street,
    City,
    Province,
    PostCode,
    Active,
}

impl PropertyColumn {
    pub const ALL: [PropertyColumn; 15] = [
        PropertyColumn::OwnerId,
        PropertyColumn::Title,
        PropertyColumn::Description,
        PropertyColumn::ThumbnailPhotoUrl,
        PropertyColumn::CoverPhotoUrl,
        PropertyColumn::CostPerNight,
        PropertyColumn::ParkingSpaces,
        PropertyColumn::NumberOfBathrooms,
        PropertyColumn::NumberOfBedrooms,
        PropertyColumn::Country,
        PropertyColumn::Street,
        PropertyColumn::City,
        PropertyColumn::Province,
        PropertyColumn::PostCode,
        PropertyColumn::Active,
    ];
}

impl Column for PropertyColumn {
    const TABLE: &'static str = "properties";

    fn name(&self) -> &'static str {
        match self {
            PropertyColumn::OwnerId => "owner_id",
            PropertyColumn::Title => "title",
            PropertyColumn::Description => "description",
            PropertyColumn::ThumbnailPhotoUrl => "thumbnail_photo_url",
            PropertyColumn::CoverPhotoUrl => "cover_photo_url",
            PropertyColumn::CostPerNight => "cost_per_night",
            PropertyColumn::ParkingSpaces => "parking_spaces",
            PropertyColumn::NumberOfBathrooms => "number_of_bathrooms",
            PropertyColumn::NumberOfBedrooms => "number_of_bedrooms",
            PropertyColumn::Country => "country",
            PropertyColumn::Street => "street",
            PropertyColumn::City => "city",
            PropertyColumn::Province => "province",
            PropertyColumn::PostCode => "post_code",
            PropertyColumn::Active => "active",
        }
    }

    fn kind(&self) -> ColumnKind {
        match self {
            PropertyColumn::OwnerId
            | PropertyColumn::CostPerNight
            | PropertyColumn::ParkingSpaces
            | PropertyColumn::NumberOfBathrooms
            | PropertyColumn::NumberOfBedrooms => ColumnKind::Integer,
            PropertyColumn::Active => ColumnKind::Boolean,
            _ => ColumnKind::Text,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}
