// src/db/outcome.rs
// DOCUMENTATION: Failure policy shared by every exported data operation
// PURPOSE: Log the failure and resolve with no value

use crate::errors::LightBnbError;

/// Collapse a failed operation into `None` after logging its message
/// DOCUMENTATION: Callers see `None` for both "nothing found" and "query
/// failed"; the log is the only place the two differ
pub fn absent_on_error<T>(operation: &str, result: Result<T, LightBnbError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{} failed: {}", operation, e);
            None
        }
    }
}
