// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod properties;
pub mod reservations;
pub mod users;

pub use health::config as health_config;
pub use properties::config as properties_config;
pub use reservations::config as reservations_config;
pub use users::config as users_config;
