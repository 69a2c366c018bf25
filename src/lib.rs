//! Galactic service core modules.
//!
//! This crate contains the full backend for the Galactic fleet registry: HTTP
//! routing and controllers, the spaceship domain service, SeaORM-backed data
//! repositories, configuration loading, and startup wiring. Spaceship records
//! and their armament sub-records are exposed through a JSON REST API.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
