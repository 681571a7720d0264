//! Domain models for the Hearth & Crumb Bakery Platform

mod ingredient;
mod order;
mod promo;
mod recipe;
mod review;
mod subscription;

pub use ingredient::*;
pub use order::*;
pub use promo::*;
pub use recipe::*;
pub use review::*;
pub use subscription::*;
