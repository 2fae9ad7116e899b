use crate::environment::Environment;
use leptos::prelude::*;
use leptos_auth_controller::components::{DebugView, GatedContent, LoginButtons};
use leptos_auth_controller::{Auth0Client, BrowserLocation, UseAuthOptions, use_auth_controller};

#[component]
pub fn App() -> impl IntoView {
    let env = Environment::load();

    let Some(origin) = BrowserLocation::origin() else {
        return view! { <p>"Could not determine the origin of this page."</p> }.into_any();
    };

    let _auth = use_auth_controller(
        UseAuthOptions::for_origin(env.domain, env.client_id, origin),
        Auth0Client::new(),
        BrowserLocation,
    );

    view! {
        <main style="max-width: 40em; margin: 2em auto;">
            <h1>"Login demo"</h1>
            <LoginButtons/>
            <GatedContent>
                <h2>"Gated content"</h2>
                <p>"You are logged in. This is what the identity provider told us about you."</p>
            </GatedContent>
            <DebugView/>
        </main>
    }
    .into_any()
}
