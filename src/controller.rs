use crate::callback::{CallbackErrorResponse, CallbackQuery, has_callback_signature};
use crate::client::{AuthClient, ClientError};
use crate::config::UseAuthOptions;
use crate::error::{
    AuthControllerError, CallbackParseSnafu, InitializeSnafu, LoginSnafu, LogoutSnafu, SerdeSnafu,
    ViewRefreshSnafu,
};
use crate::location::Location;
use crate::view::AuthView;
use leptos::prelude::*;
use snafu::ResultExt;
use std::rc::Rc;

/// Keeps an [`AuthView`] consistent with the authentication flag of an external [`AuthClient`]
/// and forwards login and logout intents to that client.
///
/// Every operation logs its own failure and then returns it. Callers are free to ignore the
/// result, the view is never left in a state requiring cleanup.
///
/// Cheap to clone. All clones share the same client, location and view.
pub struct AuthStateController<C, L> {
    client: Rc<C>,
    location: Rc<L>,
    options: Rc<UseAuthOptions>,
    view: AuthView,
}

impl<C, L> Clone for AuthStateController<C, L> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            location: Rc::clone(&self.location),
            options: Rc::clone(&self.options),
            view: self.view,
        }
    }
}

impl<C, L> std::fmt::Debug for AuthStateController<C, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStateController")
            .field("options", &self.options)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<C: AuthClient, L: Location> AuthStateController<C, L> {
    pub fn new(options: UseAuthOptions, client: C, location: L, view: AuthView) -> Self {
        Self {
            client: Rc::new(client),
            location: Rc::new(location),
            options: Rc::new(options),
            view,
        }
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    pub fn options(&self) -> &UseAuthOptions {
        &self.options
    }

    /// Sets up the client and brings the view in line with it.
    ///
    /// When the user is not authenticated yet and the current location carries the answer of the
    /// identity provider to a login, that login is completed first. The callback parameters are
    /// removed from the location afterwards, whether the login could be completed or not.
    pub async fn initialize(&self) -> Result<(), AuthControllerError> {
        tracing::trace!("Initializing auth client...");
        self.client
            .init(&self.options.client_config())
            .await
            .context(InitializeSnafu)
            .inspect_err(|err| tracing::error!(?err, "Could not initialize auth client."))?;

        // Logged by `refresh_view` itself.
        let _ = self.refresh_view().await;

        let is_authenticated = self
            .client
            .is_authenticated()
            .await
            .context(InitializeSnafu)
            .inspect_err(|err| tracing::error!(?err, "Could not read authentication state."))?;

        if is_authenticated {
            tracing::info!("User is authenticated.");
            return Ok(());
        }
        tracing::info!("User is not authenticated.");

        let query = self.location.search();
        if has_callback_signature(&query) {
            return self.complete_login().await;
        }

        match CallbackQuery::parse(&query) {
            Some(CallbackQuery::Error(CallbackErrorResponse {
                error_response,
                state: _,
            })) => {
                tracing::error!(?error_response, "Identity provider rejected the login.");
                self.location.strip_query();
                Err(AuthControllerError::CallbackParse {
                    source: ClientError::ErrResponse { error_response },
                })
            }
            Some(CallbackQuery::Authorization(_)) | None => Ok(()),
        }
    }

    async fn complete_login(&self) -> Result<(), AuthControllerError> {
        tracing::trace!("Handling authorization callback...");
        let result = self
            .client
            .handle_redirect_callback()
            .await
            .context(CallbackParseSnafu);
        match &result {
            Ok(()) => tracing::info!("Logged in."),
            Err(err) => tracing::error!(?err, "Could not handle authorization callback."),
        }

        let _ = self.refresh_view().await;

        // The code was consumed, successfully or not. Drop it from the visible location so that
        // reloading the page does not try again, without reloading the page ourselves.
        self.location.strip_query();

        result
    }

    /// Starts the interactive login. On success, the browser is about to navigate away.
    pub async fn login(&self) -> Result<(), AuthControllerError> {
        tracing::info!("Logging in...");
        self.client
            .login_with_redirect(&self.options.login_options())
            .await
            .context(LoginSnafu)
            .inspect_err(|err| tracing::error!(?err, "Login failed."))
    }

    /// Ends the session. The client redirects back to `return_to`.
    pub async fn logout(&self) -> Result<(), AuthControllerError> {
        tracing::info!("Logging out...");
        self.client
            .logout(&self.options.logout_options())
            .await
            .context(LogoutSnafu)
            .inspect_err(|err| tracing::error!(?err, "Logout failed."))
    }

    /// Recomputes the view from the authentication flag of the client.
    ///
    /// Fields are written as soon as their value is known. A failing call aborts the refresh,
    /// leaving everything written up to that point in place.
    pub async fn refresh_view(&self) -> Result<(), AuthControllerError> {
        let result = self.try_refresh_view().await;
        match &result {
            Ok(()) => tracing::debug!("View updated."),
            Err(err) => tracing::error!(?err, "Could not update view."),
        }
        result
    }

    async fn try_refresh_view(&self) -> Result<(), AuthControllerError> {
        let is_authenticated = self
            .client
            .is_authenticated()
            .await
            .context(ViewRefreshSnafu)?;

        self.view.apply_authentication_flag(is_authenticated);
        if !is_authenticated {
            return Ok(());
        }

        let access_token = self
            .client
            .get_token_silently()
            .await
            .context(ViewRefreshSnafu)?;
        self.view.access_token.set(access_token);

        let user_profile = match self.client.get_user().await.context(ViewRefreshSnafu)? {
            Some(profile) => profile.to_json().context(SerdeSnafu)?,
            None => String::new(),
        };
        self.view.user_profile.set(user_profile);

        Ok(())
    }
}
