// src/db/insert.rs
// DOCUMENTATION: INSERT statements over an explicit column list
// PURPOSE: Only columns a table declares may be inserted, one bind per column

use crate::db::{BindValue, Statement};
use crate::errors::LightBnbError;
use serde_json::{Map, Value};

/// Storage type of a column, used to coerce incoming values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Boolean,
}

/// An insertable column of one table
pub trait Column: Copy + Eq + Sized + 'static {
    const TABLE: &'static str;

    fn name(&self) -> &'static str;

    fn kind(&self) -> ColumnKind;

    fn from_name(name: &str) -> Option<Self>;
}

/// Ordered (column, value) pairs for a single row
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRecord<C: Column> {
    fields: Vec<(C, BindValue)>,
}

impl<C: Column> Default for InsertRecord<C> {
    fn default() -> Self {
        InsertRecord { fields: Vec::new() }
    }
}

impl<C: Column> InsertRecord<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, checking the value against the column's kind
    /// Setting a column twice replaces the value and keeps its first position
    pub fn set(mut self, column: C, value: impl Into<BindValue>) -> Result<Self, LightBnbError> {
        let value = coerce(column, value.into())?;

        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }

        Ok(self)
    }

    /// Build a record from a JSON object, in document order
    /// DOCUMENTATION: Unknown keys, nulls, arrays and objects are rejected
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, LightBnbError> {
        if object.is_empty() {
            return Err(LightBnbError::InvalidInput(format!(
                "no columns supplied for {}",
                C::TABLE
            )));
        }

        object.iter().try_fold(Self::new(), |record, (key, value)| {
            let column = C::from_name(key).ok_or_else(|| {
                LightBnbError::UnknownColumn(format!("{}.{}", C::TABLE, key))
            })?;
            record.set(column, json_scalar(key, value)?)
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `INSERT INTO <table> (<columns>) VALUES ($1, ..) RETURNING *`
    pub fn to_statement(&self) -> Result<Statement, LightBnbError> {
        if self.is_empty() {
            return Err(LightBnbError::InvalidInput(format!(
                "no columns supplied for {}",
                C::TABLE
            )));
        }

        let columns: Vec<&str> = self.fields.iter().map(|(c, _)| c.name()).collect();
        let placeholders: Vec<String> = (1..=self.fields.len()).map(|i| format!("${}", i)).collect();

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            C::TABLE,
            columns.join(", "),
            placeholders.join(", ")
        );

        Ok(Statement::new(
            sql,
            self.fields.iter().map(|(_, v)| v.clone()).collect(),
        ))
    }
}

fn json_scalar(key: &str, value: &Value) -> Result<BindValue, LightBnbError> {
    match value {
        Value::String(s) => Ok(BindValue::Text(s.clone())),
        Value::Bool(b) => Ok(BindValue::Boolean(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(BindValue::Integer(i)),
            None => Ok(BindValue::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        Value::Null | Value::Array(_) | Value::Object(_) => Err(LightBnbError::InvalidInput(
            format!("{} must be a string, number or boolean", key),
        )),
    }
}

// Form posts send every field as a string, so numeric and boolean text is accepted
fn coerce<C: Column>(column: C, value: BindValue) -> Result<BindValue, LightBnbError> {
    let shown = format!("{:?}", value);
    let invalid = |expected: &str| {
        LightBnbError::InvalidInput(format!(
            "{}.{} expects {}, got {}",
            C::TABLE,
            column.name(),
            expected,
            shown
        ))
    };

    match (column.kind(), value) {
        (ColumnKind::Text, BindValue::Text(s)) => Ok(BindValue::Text(s)),
        (ColumnKind::Text, BindValue::Integer(i)) => Ok(BindValue::Text(i.to_string())),
        (ColumnKind::Text, BindValue::Float(f)) => Ok(BindValue::Text(f.to_string())),
        (ColumnKind::Text, BindValue::Boolean(_)) => Err(invalid("text")),
        (ColumnKind::Integer, BindValue::Integer(i)) => Ok(BindValue::Integer(i)),
        (ColumnKind::Integer, BindValue::Float(f)) if f.is_finite() && f.fract() == 0.0 => {
            Ok(BindValue::Integer(f as i64))
        }
        (ColumnKind::Integer, BindValue::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(BindValue::Integer)
            .map_err(|_| invalid("an integer")),
        (ColumnKind::Integer, _) => Err(invalid("an integer")),
        (ColumnKind::Boolean, BindValue::Boolean(b)) => Ok(BindValue::Boolean(b)),
        (ColumnKind::Boolean, BindValue::Text(s)) => match s.trim() {
            "true" | "t" | "on" => Ok(BindValue::Boolean(true)),
            "false" | "f" | "off" => Ok(BindValue::Boolean(false)),
            _ => Err(invalid("a boolean")),
        },
        (ColumnKind::Boolean, _) => Err(invalid("a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyColumn;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_binds_follow_key_order() {
        let body = object(json!({
            "title": "Cozy cabin",
            "owner_id": 3,
            "cost_per_night": "12500",
            "city": "Banff",
            "active": true
        }));

        let record = InsertRecord::<PropertyColumn>::from_json(&body).unwrap();
        let statement = record.to_statement().unwrap();

        assert_eq!(
            statement.sql,
            "INSERT INTO properties (title, owner_id, cost_per_night, city, active) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *"
        );
        assert_eq!(statement.binds.len(), body.len());
        assert_eq!(
            statement.binds,
            vec![
                BindValue::Text("Cozy cabin".into()),
                BindValue::Integer(3),
                BindValue::Integer(12500),
                BindValue::Text("Banff".into()),
                BindValue::Boolean(true),
            ]
        );
    }

    #[test]
    fn test_reordered_keys_reorder_binds() {
        let body = object(json!({ "city": "Banff", "title": "Cozy cabin" }));
        let statement = InsertRecord::<PropertyColumn>::from_json(&body)
            .unwrap()
            .to_statement()
            .unwrap();

        assert!(statement.sql.contains("(city, title)"));
        assert_eq!(statement.binds[0], BindValue::Text("Banff".into()));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let body = object(json!({ "title": "Cabin", "id": 99 }));
        let err = InsertRecord::<PropertyColumn>::from_json(&body).unwrap_err();

        assert!(matches!(err, LightBnbError::UnknownColumn(ref c) if c == "properties.id"));
    }

    #[test]
    fn test_empty_record_rejected() {
        assert!(InsertRecord::<PropertyColumn>::from_json(&Map::new()).is_err());
        assert!(InsertRecord::<PropertyColumn>::new().to_statement().is_err());
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let body = object(json!({ "parking_spaces": "several" }));
        assert!(matches!(
            InsertRecord::<PropertyColumn>::from_json(&body),
            Err(LightBnbError::InvalidInput(_))
        ));

        let body = object(json!({ "title": null }));
        assert!(InsertRecord::<PropertyColumn>::from_json(&body).is_err());

        let body = object(json!({ "number_of_bedrooms": 2.5 }));
        assert!(InsertRecord::<PropertyColumn>::from_json(&body).is_err());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let record = InsertRecord::new()
            .set(PropertyColumn::Title, "First")
            .and_then(|r| r.set(PropertyColumn::City, "Banff"))
            .and_then(|r| r.set(PropertyColumn::Title, "Second"))
            .unwrap();

        assert_eq!(record.len(), 2);
        let statement = record.to_statement().unwrap();
        assert!(statement.sql.contains("(title, city)"));
        assert_eq!(statement.binds[0], BindValue::Text("Second".into()));
    }

    #[test]
    fn test_numbers_into_text_columns() {
        let body = object(json!({ "post_code": 90210 }));
        let statement = InsertRecord::<PropertyColumn>::from_json(&body)
            .unwrap()
            .to_statement()
            .unwrap();

        assert_eq!(statement.binds, vec![BindValue::Text("90210".into())]);
    }
}
