//! Authentication state for the administration session.
//!
//! The core never validates credentials itself; it exchanges them with the
//! store, keeps the opaque token for the session, and reads presence of
//! that token to decide whether to proceed past the initial load. Durable
//! storage of token and profile is the host application's concern.

use serde::Deserialize;

use crate::{client::Client, error::Error};

/// Profile record of the signed-in administrator.
#[derive(Clone, Debug, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl UserProfile {
    /// Name shown in the header: email, else username, else a generic
    /// label.
    pub fn display_name(&self) -> &str {
        self.email
            .as_deref()
            .filter(|value| !value.is_empty())
            .or_else(|| self.username.as_deref().filter(|value| !value.is_empty()))
            .unwrap_or("Usuario")
    }
}

/// Token plus profile returned by the store's password authentication.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub record: UserProfile,
}

/// In-memory session state.
#[derive(Default)]
pub struct AuthState {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl AuthState {
    /// Creates a new instance of [`AuthState`] with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a session saved by the host application and attaches its
    /// token to `client`.
    pub fn restore(client: &Client, token: String, user: UserProfile) -> Self {
        client.set_token(Some(token.clone()));
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    /// Whether a session token is present; only the store can judge
    /// whether it is still valid.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Name to show in the header, before or after sign-in.
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(UserProfile::display_name)
            .unwrap_or("Usuario")
    }

    /// Signs in against the store and attaches the token to `client`.
    pub async fn login(
        &mut self,
        client: &Client,
        identity: &str,
        password: &str,
    ) -> Result<(), Error> {
        let auth = client.auth_with_password(identity, password).await?;
        tracing::info!(user = %auth.record.display_name(), "signed in");
        client.set_token(Some(auth.token.clone()));
        self.token = Some(auth.token);
        self.user = Some(auth.record);
        Ok(())
    }

    /// Discards the session and detaches the token from `client`.
    pub fn logout(&mut self, client: &Client) {
        client.set_token(None);
        self.token = None;
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use residencia_test_utils::prelude::*;

    use super::{AuthState, UserProfile};

    /// Expect email to win, then username, then the generic label
    #[test]
    fn display_name_coalesces_profile_fields() {
        let with_email: UserProfile =
            serde_json::from_value(factory::user("u1", Some("admin@uni.cu"), Some("admin")))
                .unwrap();
        assert_eq!(with_email.display_name(), "admin@uni.cu");

        let with_username: UserProfile =
            serde_json::from_value(factory::user("u2", None, Some("admin"))).unwrap();
        assert_eq!(with_username.display_name(), "admin");

        let bare: UserProfile = serde_json::from_value(factory::user("u3", None, None)).unwrap();
        assert_eq!(bare.display_name(), "Usuario");
    }

    /// Expect login to install the token and logout to clear it
    #[tokio::test]
    async fn login_and_logout_manage_the_session() {
        let mut test = TestSetup::new().await;
        let _endpoint = test.fixtures().with_auth_endpoint(
            "auth-token",
            factory::user("u1", Some("admin@uni.cu"), None),
            1,
        );

        let mut state = AuthState::new();
        assert!(!state.is_authenticated());

        state
            .login(test.store.client(), "admin@uni.cu", "secret")
            .await
            .unwrap();
        assert!(state.is_authenticated());
        assert_eq!(state.display_name(), "admin@uni.cu");

        state.logout(test.store.client());
        assert!(!state.is_authenticated());
        assert_eq!(state.display_name(), "Usuario");
    }
}
