// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod property;
pub mod reservation;
pub mod user;

pub use property::*;
pub use reservation::*;
pub use user::*;
