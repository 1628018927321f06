// src/db/statement.rs
// DOCUMENTATION: SQL text paired with its positional parameters
// PURPOSE: Let query builders produce inspectable statements that bind onto sqlx

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use std::fmt;

/// A single positional parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Text(v) => write!(f, "{}", v),
            BindValue::Integer(v) => write!(f, "{}", v),
            BindValue::Float(v) => write!(f, "{}", v),
            BindValue::Boolean(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Text(v)
    }
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Integer(v)
    }
}

impl From<i32> for BindValue {
    fn from(v: i32) -> Self {
        BindValue::Integer(v.into())
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::Float(v)
    }
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        BindValue::Boolean(v)
    }
}

/// SQL text plus its parameters, `$1` referring to `binds[0]`
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, binds: Vec<BindValue>) -> Self {
        Statement {
            sql: sql.into(),
            binds,
        }
    }

    /// Build a typed sqlx query with every parameter bound in order
    pub fn query_as<'q, T>(&'q self) -> QueryAs<'q, Postgres, T, PgArguments>
    where
        T: for<'r> FromRow<'r, PgRow>,
    {
        self.binds
            .iter()
            .fold(sqlx::query_as::<_, T>(&self.sql), |query, bind| match bind {
                BindValue::Text(v) => query.bind(v.as_str()),
                BindValue::Integer(v) => query.bind(*v),
                BindValue::Float(v) => query.bind(*v),
                BindValue::Boolean(v) => query.bind(*v),
            })
    }
}
