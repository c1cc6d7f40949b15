use crate::error::Error;

/// Runtime configuration, read from the environment.
pub struct Config {
    /// Base URL of the record store, e.g. `http://localhost:8090`.
    pub store_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            store_url: std::env::var("STORE_URL")
                .map_err(|_| Error::MissingEnvVar("STORE_URL".to_string()))?,
        })
    }
}
