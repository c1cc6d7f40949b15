//! Record-store mock endpoint builders.
//!
//! Each helper registers an endpoint on the setup's mockito server and
//! returns the [`Mock`] so the test can keep it alive and `assert()` the
//! expected number of hits.

use mockito::Mock;
use residencia::model::Collection;
use serde_json::{json, Value};

use crate::fixtures::{factory, StoreFixtures};

impl<'a> StoreFixtures<'a> {
    fn records_path(collection: Collection) -> String {
        format!("/api/collections/{}/records", collection.name())
    }

    /// Mock a successful listing for `collection` returning `items`.
    ///
    /// The mock verifies it was called exactly `expected_requests` times
    /// when asserted.
    pub fn with_list_endpoint(
        &mut self,
        collection: Collection,
        items: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", Self::records_path(collection).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::list_body(&items).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock a successful listing without a hit-count expectation, for
    /// tests where sibling fetches may be cancelled mid-reload.
    pub fn with_loose_list_endpoint(&mut self, collection: Collection, items: Vec<Value>) -> Mock {
        self.setup
            .server
            .mock("GET", Self::records_path(collection).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::list_body(&items).to_string())
            .expect_at_least(0)
            .create()
    }

    /// Mock a failing listing for `collection` with the store's error
    /// body.
    pub fn with_failed_list_endpoint(
        &mut self,
        collection: Collection,
        status: usize,
        message: &str,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", Self::records_path(collection).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": message }).to_string())
            .create()
    }

    /// Mock empty listings for every collection not named in `skip`.
    pub fn with_empty_collections(&mut self, skip: &[Collection]) -> Vec<Mock> {
        Collection::ALL
            .iter()
            .copied()
            .filter(|collection| !skip.contains(collection))
            .map(|collection| self.with_list_endpoint(collection, Vec::new(), 1))
            .collect()
    }

    /// Mock a successful create for `collection` answering with `record`.
    pub fn with_create_endpoint(
        &mut self,
        collection: Collection,
        record: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", Self::records_path(collection).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(record.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock a rejected create for `collection`.
    pub fn with_failed_create_endpoint(
        &mut self,
        collection: Collection,
        status: usize,
        message: &str,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", Self::records_path(collection).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": message }).to_string())
            .create()
    }

    /// Mock a successful update of one record.
    pub fn with_update_endpoint(
        &mut self,
        collection: Collection,
        id: &str,
        record: Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{}/{}", Self::records_path(collection), id);
        self.setup
            .server
            .mock("PATCH", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(record.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock a successful delete of one record.
    pub fn with_delete_endpoint(
        &mut self,
        collection: Collection,
        id: &str,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("{}/{}", Self::records_path(collection), id);
        self.setup
            .server
            .mock("DELETE", path.as_str())
            .with_status(204)
            .expect(expected_requests)
            .create()
    }

    /// Mock a rejected delete of one record.
    pub fn with_failed_delete_endpoint(
        &mut self,
        collection: Collection,
        id: &str,
        status: usize,
        message: &str,
    ) -> Mock {
        let path = format!("{}/{}", Self::records_path(collection), id);
        self.setup
            .server
            .mock("DELETE", path.as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": message }).to_string())
            .create()
    }

    /// Mock the password authentication endpoint.
    pub fn with_auth_endpoint(
        &mut self,
        token: &str,
        record: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/collections/users/auth-with-password")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::auth_body(token, &record).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock a failing password authentication.
    pub fn with_failed_auth_endpoint(&mut self, status: usize, message: &str) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/collections/users/auth-with-password")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": message }).to_string())
            .create()
    }
}
