//! Shared test utilities for the Galactic workspace.
//!
//! Provides a declarative [`TestBuilder`] that stands up an in-memory SQLite
//! database with the fleet schema, a [`TestContext`] with fixture insertion
//! helpers, and factory functions for mock ship data.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::factory;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestContext, TestError};
}
