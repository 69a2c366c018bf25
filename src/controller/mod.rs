//! HTTP controller endpoints for the Galactic API.
//!
//! This module contains the Axum handlers for the spaceship resource and the
//! liveness endpoints. Controllers decode HTTP requests into request models,
//! invoke the domain service, and encode results or taxonomy-mapped errors
//! into JSON responses. They use utoipa for OpenAPI documentation.

pub mod spaceship;
pub mod status;
