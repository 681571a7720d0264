//! Shared types and models for the Hearth & Crumb Bakery Platform
//!
//! This crate contains types shared between the production engine, the
//! storefront (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
