//! Service layer for business logic and orchestration.
//!
//! This module contains the domain services sitting between the HTTP
//! controllers and the data repositories. Services enforce existence checks
//! before mutations and orchestrate multi-step sequences such as the
//! armament replacement performed on update.

pub mod spaceship;
