use crate::callback::ErrorResponse;
use crate::config::{ClientConfig, LoginOptions, LogoutOptions};
use crate::profile::UserProfile;
use snafu::Snafu;
use std::future::Future;

/// Failures surfaced by an [`AuthClient`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ClientError {
    #[snafu(display("ClientError: Client was used before being initialized"))]
    NotInitialized,

    #[snafu(display("ClientError: Call was rejected: {message}"))]
    Rejected { message: String },

    #[snafu(display("ClientError: Received an error response"))]
    ErrResponse { error_response: ErrorResponse },

    #[snafu(display("ClientError: Could not convert payload: {message}"))]
    Convert { message: String },
}

/// The identity provider's client SDK.
///
/// Everything protocol related (authorization code exchange, token storage and silent refresh,
/// signature verification) happens behind this trait. The controller only ever reads the
/// authentication flag and forwards user intents.
///
/// All calls may suspend. Nothing here is `Send`: implementations typically wrap browser objects.
pub trait AuthClient {
    /// One-time setup. Must be awaited before any other call.
    fn init(&self, config: &ClientConfig) -> impl Future<Output = Result<(), ClientError>>;

    /// Starts the interactive login. On success the browser navigates away.
    fn login_with_redirect(
        &self,
        options: &LoginOptions,
    ) -> impl Future<Output = Result<(), ClientError>>;

    /// Clears the session and redirects to `options.return_to`.
    fn logout(&self, options: &LogoutOptions) -> impl Future<Output = Result<(), ClientError>>;

    fn is_authenticated(&self) -> impl Future<Output = Result<bool, ClientError>>;

    fn get_token_silently(&self) -> impl Future<Output = Result<String, ClientError>>;

    /// `None` when no user is logged in.
    fn get_user(&self) -> impl Future<Output = Result<Option<UserProfile>, ClientError>>;

    /// Completes a pending login using the `code` and `state` of the current location.
    /// Fails on invalid or missing callback parameters.
    fn handle_redirect_callback(&self) -> impl Future<Output = Result<(), ClientError>>;
}
