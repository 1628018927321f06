// src/db/user_repository.rs
// DOCUMENTATION: User database operations
// PURPOSE: Look up users by email or id and register new users

use crate::db::{absent_on_error, BindValue, Statement};
use crate::errors::LightBnbError;
use crate::models::{NewUser, User};
use sqlx::PgPool;

const USER_SELECT: &str = "SELECT id, name, email, password
FROM users";

pub struct UserRepository;

impl UserRepository {
    /// Single user by exact email
    /// DOCUMENTATION: None when no user matches or the query fails
    pub async fn get_user_with_email(pool: &PgPool, email: &str) -> Option<User> {
        first_user(Self::try_get_user_with_email(pool, email).await)
    }

    /// Users whose id matches the LIKE pattern `id`
    /// DOCUMENTATION: Returns every matching row even though ids are unique
    pub async fn get_user_with_id(pool: &PgPool, id: &str) -> Option<Vec<User>> {
        absent_on_error("get_user_with_id", Self::try_get_user_with_id(pool, id).await)
    }

    /// Insert a user, returning the inserted rows
    pub async fn add_user(pool: &PgPool, user: &NewUser) -> Option<Vec<User>> {
        absent_on_error("add_user", Self::try_add_user(pool, user).await)
    }

    async fn try_get_user_with_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<User>, LightBnbError> {
        let statement = user_with_email_statement(email);
        let user = statement.query_as::<User>().fetch_optional(pool).await?;

        if user.is_none() {
            log::debug!("No user with email {}", email);
        }
        Ok(user)
    }

    async fn try_get_user_with_id(pool: &PgPool, id: &str) -> Result<Vec<User>, LightBnbError> {
        let statement = user_with_id_statement(id);
        Ok(statement.query_as::<User>().fetch_all(pool).await?)
    }

    async fn try_add_user(pool: &PgPool, user: &NewUser) -> Result<Vec<User>, LightBnbError> {
        let statement = user.to_record()?.to_statement()?;
        let users = statement.query_as::<User>().fetch_all(pool).await?;

        log::info!("Added {} user(s) for {}", users.len(), user.email);
        Ok(users)
    }
}

// fetch_optional yields Ok(None) for zero rows; that and a failure both end as None
fn first_user(result: Result<Option<User>, LightBnbError>) -> Option<User> {
    absent_on_error("get_user_with_email", result).flatten()
}

fn user_with_email_statement(email: &str) -> Statement {
    Statement::new(
        format!("{}\nWHERE email = $1", USER_SELECT),
        vec![BindValue::from(email)],
    )
}

// id is an integer column; the text cast keeps LIKE applicable
fn user_with_id_statement(id: &str) -> Statement {
    Statement::new(
        format!("{}\nWHERE id::text LIKE $1", USER_SELECT),
        vec![BindValue::from(id)],
    )
}
