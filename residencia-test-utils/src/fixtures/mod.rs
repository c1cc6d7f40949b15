pub mod factory;
mod mockito;

use crate::setup::TestSetup;

/// Fixture namespace over a [`TestSetup`]'s mock server.
///
/// Endpoint builders live in the `mockito` submodule; record factories are
/// free functions in [`factory`].
pub struct StoreFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

impl<'a> StoreFixtures<'a> {
    /// Creates a new instance of [`StoreFixtures`] bound to `setup`.
    pub fn new(setup: &'a mut TestSetup) -> Self {
        Self { setup }
    }
}
