// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::db::{Column, ColumnKind, InsertRecord};
use crate::errors::LightBnbError;

/// A row of the users table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to register a new user
/// DOCUMENTATION: Body of POST /users, inserted as (name, email, password)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// User DTO exposed via API, without the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl NewUser {
    /// Columns inserted for a new user, in (name, email, password) order
    pub fn to_record(&self) -> Result<InsertRecord<UserColumn>, LightBnbError> {
        InsertRecord::new()
            .set(UserColumn::Name, self.name.as_str())?
            .set(UserColumn::Email, self.email.as_str())?
            .set(UserColumn::Password, self.password.as_str())
    }
}

/// Columns a caller may supply when inserting a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserColumn {
    Name,
    Email,
    Password,
}

impl Column for UserColumn {
    const TABLE: &'static str = "users";

    fn name(&self) -> &'static str {
        match self {
            UserColumn::Name => "name",
            UserColumn::Email => "email",
            UserColumn::Password => "password",
        }
    }

    fn kind(&self) -> ColumnKind {
        ColumnKind::Text
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(UserColumn::Name),
            "email" => Some(UserColumn::Email),
            "password" => Some(UserColumn::Password),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::BindValue;

    #[test]
    fn test_new_user_validation() {
        let ok = NewUser {
            name: "Eva Stanley".to_string(),
            email: "sebastianguerra@ymail.com".to_string(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = NewUser {
            email: "not-an-email".to_string(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let no_name = NewUser {
            name: String::new(),
            ..ok
        };
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_new_user_insert_statement() {
        let user = NewUser {
            name: "Eva Stanley".to_string(),
            email: "sebastianguerra@ymail.com".to_string(),
            password: "hash".to_string(),
        };

        let statement = user.to_record().unwrap().to_statement().unwrap();

        assert_eq!(
            statement.sql,
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *"
        );
        assert_eq!(
            statement.binds,
            vec![
                BindValue::Text("Eva Stanley".into()),
                BindValue::Text("sebastianguerra@ymail.com".into()),
                BindValue::Text("hash".into()),
            ]
        );
    }

    #[test]
    fn test_response_omits_password() {
        let user = User {
            id: 1,
            name: "Eva Stanley".to_string(),
            email: "sebastianguerra@ymail.com".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_value(user.to_response()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "sebastianguerra@ymail.com");
    }
}
