use crate::client::ClientError;
use snafu::Snafu;

/// Failures of the [`AuthStateController`](crate::AuthStateController) operations.
///
/// Each one is logged where it happens. Returning it is only informative: the UI ignores it.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AuthControllerError {
    #[snafu(display("AuthControllerError: Could not initialize the auth client"))]
    Initialize { source: ClientError },

    #[snafu(display("AuthControllerError: Login failed"))]
    Login { source: ClientError },

    #[snafu(display("AuthControllerError: Logout failed"))]
    Logout { source: ClientError },

    #[snafu(display("AuthControllerError: Could not handle the authorization callback"))]
    CallbackParse { source: ClientError },

    #[snafu(display("AuthControllerError: Could not refresh the view"))]
    ViewRefresh { source: ClientError },

    #[snafu(display("AuthControllerError: Could not serialize the user profile: {source}"))]
    Serde { source: serde_json::Error },
}
