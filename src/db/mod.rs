// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod filter;
pub mod insert;
pub mod outcome;
pub mod property_repository;
pub mod reservation_repository;
pub mod statement;
pub mod user_repository;

pub use filter::*;
pub use insert::*;
pub use outcome::*;
pub use property_repository::*;
pub use reservation_repository::*;
pub use statement::*;
pub use user_repository::*;
