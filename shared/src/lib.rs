//! Shared types and models for the Field Monitoring Sync Platform
//!
//! This crate contains types shared between the backend and the mobile
//! clients that batch field data for synchronization.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
