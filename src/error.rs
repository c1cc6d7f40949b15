use thiserror::Error;

/// Failures surfaced by the record-store client and the collection store.
#[derive(Error, Debug)]
pub enum Error {
    /// The backing store rejected a request. Carries the store's own
    /// message unchanged so it can be shown to the user as-is.
    #[error("{0}")]
    Rejected(String),
    /// One of the per-collection fetches inside a reload failed; the
    /// snapshot was left untouched.
    #[error("failed to load collection {collection}")]
    CollectionLoad {
        /// Wire name of the collection whose fetch failed.
        collection: &'static str,
        #[source]
        source: Box<Error>,
    },
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),
}
