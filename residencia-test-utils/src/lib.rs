//! Shared test fixtures for the residencia crate.
//!
//! Provides a [`TestSetup`] wrapping a mockito server with a collection
//! store pointed at it, JSON record factories, and helpers that register
//! the record-store endpoints a test needs.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::factory, TestError, TestSetup};
}
