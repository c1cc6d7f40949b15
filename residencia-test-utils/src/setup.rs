use mockito::{Server, ServerGuard};
use residencia::{client::Client, store::CollectionStore};

use crate::fixtures::StoreFixtures;

/// Test environment: a mock record store plus a collection store aimed at
/// it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub store: CollectionStore,
}

impl TestSetup {
    /// Creates a new instance of [`TestSetup`] backed by a fresh mock
    /// server.
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let client = Client::new(server.url());

        Self {
            server,
            store: CollectionStore::new(client),
        }
    }

    /// Fixture helpers bound to this setup's mock server.
    pub fn fixtures(&mut self) -> StoreFixtures<'_> {
        StoreFixtures::new(self)
    }
}
