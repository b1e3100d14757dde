//! Diesel row models and their conversions into domain entities.

pub mod bag;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod item;
pub mod user;
