use crate::client::AuthClient;
use crate::config::UseAuthOptions;
use crate::controller::AuthStateController;
use crate::location::Location;
use crate::view::AuthView;
use leptos::context::provide_context;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Everything components need to render the login page. Provided as context by
/// [`use_auth_controller`].
///
/// The callbacks only schedule the operation. Their outcome is logged by the controller and
/// otherwise observable through `view`.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub view: AuthView,

    /// Derived signal stating `true` once a refresh saw an authenticated user.
    pub is_authenticated: Signal<bool>,

    pub login: Callback<()>,
    pub logout: Callback<()>,
    pub refresh_view: Callback<()>,
}

/// Creates the [`AuthStateController`] for this page, provides an [`AuthContext`] for all
/// components rendered below the calling one and kicks off
/// [`initialize`](AuthStateController::initialize).
///
/// Call this exactly once, as close to the root of your app as possible.
pub fn use_auth_controller<C, L>(options: UseAuthOptions, client: C, location: L) -> AuthContext
where
    C: AuthClient + 'static,
    L: Location + 'static,
{
    tracing::trace!("Initializing auth controller...");

    let view = AuthView::new();

    // The client wraps browser objects and is not `Send`. Keep it out of the reactive graph's
    // thread-safe storage.
    let controller = StoredValue::new_local(AuthStateController::new(
        options, client, location, view,
    ));

    let login = Callback::new(move |()| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.login().await;
        });
    });

    let logout = Callback::new(move |()| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.logout().await;
        });
    });

    let refresh_view = Callback::new(move |()| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.refresh_view().await;
        });
    });

    let auth = AuthContext {
        view,
        is_authenticated: Signal::derive(move || view.logout_enabled.get()),
        login,
        logout,
        refresh_view,
    };

    provide_context(auth);

    let initializing = controller.get_value();
    spawn_local(async move {
        let _ = initializing.initialize().await;
    });

    auth
}

/// Retrieves the [`AuthContext`] provided by [`use_auth_controller`].
///
/// # Panics
/// When called outside a component tree set up by [`use_auth_controller`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Like [`use_auth`], but `None` if no controller was set up.
pub fn try_use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}
