//! [`AuthClient`] implementation over the Auth0 SPA SDK.
//!
//! The SDK is not bundled. Load its UMD build before the application starts, making
//! `auth0.Auth0Client` available globally:
//!
//! ```html
//! <script src="https://cdn.auth0.com/js/auth0-spa-js/2.1/auth0-spa-js.production.js"></script>
//! ```

use crate::callback::{ErrorResponse, OidcErrorCode};
use crate::client::{AuthClient, ClientError};
use crate::config::{ClientConfig, LoginOptions, LogoutOptions};
use crate::profile::UserProfile;
use serde::Serialize;
use std::cell::OnceCell;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

mod sdk {
    use js_sys::Promise;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(js_namespace = auth0)]
    extern "C" {
        pub type Auth0Client;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(options: &JsValue) -> Result<Auth0Client, JsValue>;

        #[wasm_bindgen(method, js_name = checkSession)]
        pub fn check_session(this: &Auth0Client) -> Promise;

        #[wasm_bindgen(method, js_name = loginWithRedirect)]
        pub fn login_with_redirect(this: &Auth0Client, options: &JsValue) -> Promise;

        #[wasm_bindgen(method)]
        pub fn logout(this: &Auth0Client, options: &JsValue) -> Promise;

        #[wasm_bindgen(method, js_name = isAuthenticated)]
        pub fn is_authenticated(this: &Auth0Client) -> Promise;

        #[wasm_bindgen(method, js_name = getTokenSilently)]
        pub fn get_token_silently(this: &Auth0Client) -> Promise;

        #[wasm_bindgen(method, js_name = getUser)]
        pub fn get_user(this: &Auth0Client) -> Promise;

        #[wasm_bindgen(method, js_name = handleRedirectCallback)]
        pub fn handle_redirect_callback(this: &Auth0Client) -> Promise;
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SdkClientOptions<'a> {
    domain: &'a str,
    client_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SdkRedirectLoginOptions<'a> {
    authorization_params: SdkAuthorizationParams<'a>,
}

#[derive(Serialize)]
struct SdkAuthorizationParams<'a> {
    redirect_uri: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SdkLogoutOptions<'a> {
    logout_params: SdkLogoutParams<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SdkLogoutParams<'a> {
    return_to: &'a str,
}

/// The Auth0 SPA SDK client. Created lazily by [`AuthClient::init`].
#[derive(Default)]
pub struct Auth0Client {
    inner: OnceCell<sdk::Auth0Client>,
}

impl std::fmt::Debug for Auth0Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth0Client")
            .field("initialized", &self.inner.get().is_some())
            .finish()
    }
}

impl Auth0Client {
    pub fn new() -> Self {
        Self::default()
    }

    fn sdk(&self) -> Result<&sdk::Auth0Client, ClientError> {
        self.inner.get().ok_or(ClientError::NotInitialized)
    }
}

async fn settle(promise: js_sys::Promise) -> Result<JsValue, ClientError> {
    JsFuture::from(promise).await.map_err(to_client_error)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ClientError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| ClientError::Convert {
        message: err.to_string(),
    })
}

/// The SDK rejects with errors carrying the OAuth `error` and `error_description` when the
/// provider answered with an error. Everything else is reduced to its message.
fn to_client_error(err: JsValue) -> ClientError {
    let field = |name: &str| {
        js_sys::Reflect::get(&err, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_string())
    };

    if let Some(error) = field("error") {
        return ClientError::ErrResponse {
            error_response: ErrorResponse {
                error: serde_json::from_value::<OidcErrorCode>(serde_json::Value::String(
                    error.clone(),
                ))
                .unwrap_or(OidcErrorCode::Unknown(error)),
                error_description: field("error_description"),
                error_uri: None,
            },
        };
    }

    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    ClientError::Rejected { message }
}

impl AuthClient for Auth0Client {
    async fn init(&self, config: &ClientConfig) -> Result<(), ClientError> {
        if self.inner.get().is_none() {
            let options = to_js(&SdkClientOptions {
                domain: &config.domain,
                client_id: &config.client_id,
            })?;
            let client = sdk::Auth0Client::new(&options).map_err(to_client_error)?;
            let _ = self.inner.set(client);
        } else {
            tracing::warn!("Auth0 client was already initialized. Only checking session.");
        }

        // Restores an existing session. Settles successfully when there is none.
        settle(self.sdk()?.check_session()).await?;
        Ok(())
    }

    async fn login_with_redirect(&self, options: &LoginOptions) -> Result<(), ClientError> {
        let options = to_js(&SdkRedirectLoginOptions {
            authorization_params: SdkAuthorizationParams {
                redirect_uri: options.redirect_uri.as_str(),
            },
        })?;
        settle(self.sdk()?.login_with_redirect(&options)).await?;
        Ok(())
    }

    async fn logout(&self, options: &LogoutOptions) -> Result<(), ClientError> {
        let options = to_js(&SdkLogoutOptions {
            logout_params: SdkLogoutParams {
                return_to: options.return_to.as_str(),
            },
        })?;
        settle(self.sdk()?.logout(&options)).await?;
        Ok(())
    }

    async fn is_authenticated(&self) -> Result<bool, ClientError> {
        settle(self.sdk()?.is_authenticated())
            .await?
            .as_bool()
            .ok_or_else(|| ClientError::Convert {
                message: "isAuthenticated did not resolve to a boolean".to_owned(),
            })
    }

    async fn get_token_silently(&self) -> Result<String, ClientError> {
        settle(self.sdk()?.get_token_silently())
            .await?
            .as_string()
            .ok_or_else(|| ClientError::Convert {
                message: "getTokenSilently did not resolve to a string".to_owned(),
            })
    }

    async fn get_user(&self) -> Result<Option<UserProfile>, ClientError> {
        let user = settle(self.sdk()?.get_user()).await?;
        serde_wasm_bindgen::from_value(user).map_err(|err| ClientError::Convert {
            message: err.to_string(),
        })
    }

    async fn handle_redirect_callback(&self) -> Result<(), ClientError> {
        settle(self.sdk()?.handle_redirect_callback()).await?;
        Ok(())
    }
}
