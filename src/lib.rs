//! Keep a Leptos login page in sync with the authentication state of an external identity
//! provider SDK.
//!
//! All protocol work (authorization code exchange, token storage and refresh, signature
//! verification) stays inside the SDK, consumed through the [`AuthClient`] trait. This crate wires
//! login and logout intents to it and keeps an [`AuthView`] consistent with its authentication
//! flag.
//!
//! ```no_run
//! use leptos::prelude::*;
//! use leptos_auth_controller::{
//!     components::{GatedContent, LoginButtons},
//!     use_auth_controller, Auth0Client, BrowserLocation, UseAuthOptions,
//! };
//!
//! #[component]
//! pub fn App() -> impl IntoView {
//!     let origin = BrowserLocation::origin().expect("page to have an origin");
//!     let _auth = use_auth_controller(
//!         UseAuthOptions::for_origin("my-tenant.eu.auth0.com", "my-client-id", origin),
//!         Auth0Client::new(),
//!         BrowserLocation,
//!     );
//!
//!     view! {
//!         <LoginButtons/>
//!         <GatedContent>
//!             <p>"Welcome back!"</p>
//!         </GatedContent>
//!     }
//! }
//! ```

mod auth0;
mod callback;
mod client;
pub mod components;
mod config;
mod controller;
mod error;
mod hooks;
mod location;
mod profile;
mod view;

// Library exports (additional to pub modules).
pub use auth0::Auth0Client;
pub use callback::*;
pub use client::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use hooks::*;
pub use location::*;
pub use profile::*;
pub use view::*;
pub mod url {
    pub use url::Url;
}
