// src/db/filter.rs
// DOCUMENTATION: Dynamic WHERE clause for the property listing search
// PURPOSE: Turn PropertySearchOptions into one parameterized SELECT

use crate::db::{BindValue, Statement};
use crate::models::PropertySearchOptions;

pub const DEFAULT_LIMIT: i64 = 10;

const LISTING_SELECT: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 as average_rating
FROM properties
JOIN property_reviews ON properties.id = property_id";

const LISTING_TAIL: &str = "GROUP BY properties.id
ORDER BY cost_per_night";

/// Accumulates filter clauses and their parameters
/// DOCUMENTATION: Each clause refers to the parameter pushed with it, so
/// placeholders are numbered in the order filters are checked
#[derive(Debug, Default)]
pub struct PropertySearchQuery {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl PropertySearchQuery {
    /// Build the listing search for `options`, capped at `limit` rows
    /// Filters are checked in a fixed order: city, owner_id, minimum price,
    /// maximum price, minimum rating
    pub fn build(options: &PropertySearchOptions, limit: i64) -> Statement {
        let mut query = PropertySearchQuery::default();

        if let Some(city) = options.city.as_deref().filter(|c| !c.is_empty()) {
            query.push("city ILIKE", format!("%{}%", city));
        }

        if let Some(owner_id) = options.owner_id.filter(|id| *id != 0) {
            query.push("owner_id =", owner_id);
        }

        if let Some(min) = options.minimum_price_per_night.filter(|p| *p != 0.0) {
            query.push("cost_per_night >=", to_cents(min));
        }

        if let Some(max) = options.maximum_price_per_night.filter(|p| *p != 0.0) {
            query.push("cost_per_night <=", to_cents(max));
        }

        if let Some(rating) = options.minimum_rating.filter(|r| *r != 0.0) {
            query.push("rating >=", rating);
        }

        query.finish(limit)
    }

    fn push(&mut self, condition: &str, value: impl Into<BindValue>) {
        self.binds.push(value.into());
        self.clauses.push(format!("{} ${}", condition, self.binds.len()));
    }

    fn finish(mut self, limit: i64) -> Statement {
        let mut sql = String::from(LISTING_SELECT);
        sql.push('\n');

        if !self.clauses.is_empty() {
            sql.push_str("WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
            sql.push('\n');
        }

        self.binds.push(BindValue::Integer(limit));
        sql.push_str(LISTING_TAIL);
        sql.push_str(&format!("\nLIMIT ${}", self.binds.len()));

        Statement::new(sql, self.binds)
    }
}

/// Dollars to the cents stored in cost_per_night
fn to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}
