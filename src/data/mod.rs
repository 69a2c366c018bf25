//! Data access layer repositories.
//!
//! This module contains the database repository implementations for the
//! application. Repositories provide an abstraction layer over SeaORM
//! operations; a missing row is reported as an empty result rather than an
//! error, leaving existence policy to the service layer.

pub mod spaceship;
