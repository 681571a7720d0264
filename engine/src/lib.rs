//! Baker's-math and production-aggregation engine for the Hearth & Crumb
//! Bakery Platform
//!
//! Pure, synchronous computations over in-memory snapshots: one recipe in,
//! baker's percentages, hydration, nutrition, and margin out; many orders
//! and subscriptions in, a consolidated master-dough mixing list out. The
//! engine never mutates its inputs and performs no I/O, so it is safe to
//! call concurrently from any number of callers.

pub mod aggregation;
pub mod bakers_math;
pub mod config;
pub mod error;
pub mod nutrition;
pub mod production;
pub mod scaler;

pub use aggregation::*;
pub use bakers_math::*;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use nutrition::{BuiltinNutritionTable, NoNutrition, NutritionLookup};
pub use production::*;
pub use scaler::*;
