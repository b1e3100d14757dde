//! Domain entities and value types, independent of persistence.

pub mod types;
pub mod weight;

#[cfg(feature = "data")]
pub mod bag;
#[cfg(feature = "data")]
pub mod category;
#[cfg(feature = "data")]
pub mod item;
#[cfg(feature = "data")]
pub mod user;
