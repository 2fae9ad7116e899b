use serde::Serialize;
use url::Url;

/// Parameters required for initializing the [`AuthStateController`](crate::AuthStateController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseAuthOptions {
    /// Domain of your identity provider tenant, E.g. "my-tenant.eu.auth0.com"
    pub domain: String,

    /// The identifier of this application as configured at your identity provider.
    pub client_id: String,

    /// Url to which the provider should redirect after a successful login.
    /// This is where the authorization callback (`code` and `state` query parameters) arrives.
    pub redirect_uri: Url,

    /// Url to which the provider should redirect after a logout.
    pub return_to: Url,
}

impl UseAuthOptions {
    /// Options redirecting back to the application `origin` after both login and logout.
    pub fn for_origin(domain: impl Into<String>, client_id: impl Into<String>, origin: Url) -> Self {
        Self {
            domain: domain.into(),
            client_id: client_id.into(),
            redirect_uri: origin.clone(),
            return_to: origin,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            domain: self.domain.clone(),
            client_id: self.client_id.clone(),
        }
    }

    pub fn login_options(&self) -> LoginOptions {
        LoginOptions {
            redirect_uri: self.redirect_uri.clone(),
        }
    }

    pub fn logout_options(&self) -> LogoutOptions {
        LogoutOptions {
            return_to: self.return_to.clone(),
        }
    }
}

/// One-time setup handed to [`AuthClient::init`](crate::AuthClient::init).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    pub domain: String,
    pub client_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOptions {
    pub redirect_uri: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutOptions {
    pub return_to: Url,
}
