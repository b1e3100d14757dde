//! Core library exports for the Trailpack service.
//!
//! Trailpack reports the packed weight of hiking gear. The `weights` feature
//! exposes only the unit conversion and aggregation model so that clients can
//! share it; `data` adds the SQLite persistence layer and `server` the
//! Actix-web JSON API built on top of it.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "weights")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
