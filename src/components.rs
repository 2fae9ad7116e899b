use crate::hooks::use_auth;
use leptos::prelude::*;

/// The login and logout buttons.
///
/// Each button is only enabled while the action it triggers makes sense. Both are disabled until
/// the first view refresh completed.
///
/// # Example
/// ```no_run
/// use leptos::prelude::*;
/// use leptos_auth_controller::components::{GatedContent, LoginButtons};
///
/// # #[component]
/// # fn Component() -> impl IntoView {
/// view! {
///     <LoginButtons/>
///     <GatedContent>
///         <p>"Only visible when logged in."</p>
///     </GatedContent>
/// }
/// # }
/// ```
#[component]
#[allow(clippy::must_use_candidate)]
pub fn LoginButtons(
    #[prop(into, default = "Log in".to_owned())] login_label: String,
    #[prop(into, default = "Log out".to_owned())] logout_label: String,
) -> impl IntoView {
    let auth = use_auth();
    let view = auth.view;

    view! {
        <button
            id="btn-login"
            disabled=move || !view.login_enabled.get()
            on:click=move |_| auth.login.run(())
        >
            { login_label }
        </button>
        <button
            id="btn-logout"
            disabled=move || !view.logout_enabled.get()
            on:click=move |_| auth.logout.run(())
        >
            { logout_label }
        </button>
    }
}

/// Content only visible to authenticated users, together with the current access token and
/// user profile.
///
/// The panel is hidden through the `hidden` class, not removed from the DOM. The token and profile
/// inputs keep the last known values while hidden.
#[component]
#[allow(clippy::must_use_candidate)]
pub fn GatedContent(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let view = use_auth().view;

    view! {
        <div id="gated-content" class:hidden=move || !view.gated_content_visible.get()>
            { children.map(|children| children()) }
            <label for="ipt-access-token">"Access token"</label>
            <input
                id="ipt-access-token"
                type="text"
                readonly=true
                value=move || view.access_token.get()
            />
            <label for="ipt-user-profile">"User profile"</label>
            <input
                id="ipt-user-profile"
                type="text"
                readonly=true
                value=move || view.user_profile.get()
            />
        </div>
    }
}

/// Debug component showing the current view-model.
#[component]
pub fn DebugView() -> impl IntoView {
    let pretty = use_auth().view.pretty_printer();
    view! {
        <div style="width: 100%;">
            <h3>"Internal data: view"</h3>
            <pre id="auth-view">
                { pretty }
            </pre>
        </div>
    }
}
