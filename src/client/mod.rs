//! HTTP client for the schema-less record store.
//!
//! A thin wrapper over the store's REST surface: list, create, update and
//! delete records per collection, plus password authentication. Failed
//! requests keep the store's own error message so the caller can show it
//! unchanged; there is no retry and no backoff, one attempt per action.

#[cfg(test)]
mod tests;

use std::sync::RwLock;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;

use crate::{auth::AuthData, error::Error, model::Collection};

/// Envelope the store wraps collection listings in.
#[derive(Clone, Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub page: i64,
    #[serde(default, rename = "perPage")]
    pub per_page: i64,
    #[serde(default, rename = "totalItems")]
    pub total_items: i64,
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Client for one record-store instance.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl Client {
    /// Creates a new instance of [`Client`] for the store at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    /// Installs or clears the token attached to subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    fn records_url(&self, collection: Collection) -> String {
        format!("{}/api/collections/{}/records", self.base_url, collection)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().unwrap().as_deref() {
            Some(token) => request.header("Authorization", token),
            None => request,
        }
    }

    /// Maps a non-2xx response to [`Error::Rejected`] with the store's
    /// message, falling back to the status line when the body is opaque.
    async fn take_error(response: reqwest::Response) -> Result<reqwest::Response, Error> {
        if response.status().is_success() {
            return Ok(response);
        }
        let fallback = format!("request failed with status {}", response.status());
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => fallback,
        };
        Err(Error::Rejected(message))
    }

    /// Fetches every record of `collection` in the store's return order.
    pub async fn list<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, Error> {
        let response = self
            .authorized(self.http.get(self.records_url(collection)))
            .send()
            .await?;
        let body: ListResponse<T> = Self::take_error(response).await?.json().await?;
        Ok(body.items)
    }

    /// Creates a record and returns it as stored.
    pub async fn create<T, B>(&self, collection: Collection, fields: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .authorized(self.http.post(self.records_url(collection)).json(fields))
            .send()
            .await?;
        Ok(Self::take_error(response).await?.json().await?)
    }

    /// Applies a partial update to one record and returns the result.
    pub async fn update<T, B>(
        &self,
        collection: Collection,
        id: &str,
        fields: &B,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.records_url(collection), id);
        let response = self
            .authorized(self.http.patch(url).json(fields))
            .send()
            .await?;
        Ok(Self::take_error(response).await?.json().await?)
    }

    /// Deletes one record.
    pub async fn delete(&self, collection: Collection, id: &str) -> Result<(), Error> {
        let url = format!("{}/{}", self.records_url(collection), id);
        let response = self.authorized(self.http.delete(url)).send().await?;
        Self::take_error(response).await?;
        Ok(())
    }

    /// Exchanges credentials for a token and the user's profile record.
    pub async fn auth_with_password(
        &self,
        identity: &str,
        password: &str,
    ) -> Result<AuthData, Error> {
        let url = format!("{}/api/collections/users/auth-with-password", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&json!({ "identity": identity, "password": password }))
            .send()
            .await?;
        Ok(Self::take_error(response).await?.json().await?)
    }
}
