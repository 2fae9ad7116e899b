use leptos::prelude::*;

/// The view-model the login page binds to.
///
/// Only the [`AuthStateController`](crate::AuthStateController) writes to it, recomputing the
/// values from the external client on every refresh. Components read it.
///
/// Initially both buttons are disabled, the gated content is hidden and both fields are empty,
/// until the first refresh tells us which way to go.
#[derive(Debug, Clone, Copy)]
pub struct AuthView {
    pub login_enabled: RwSignal<bool>,
    pub logout_enabled: RwSignal<bool>,
    pub gated_content_visible: RwSignal<bool>,
    pub access_token: RwSignal<String>,

    /// The user profile, serialized as JSON.
    pub user_profile: RwSignal<String>,
}

impl AuthView {
    pub fn new() -> Self {
        Self {
            login_enabled: RwSignal::new(false),
            logout_enabled: RwSignal::new(false),
            gated_content_visible: RwSignal::new(false),
            access_token: RwSignal::new(String::new()),
            user_profile: RwSignal::new(String::new()),
        }
    }

    /// Toggles buttons and the gated content according to the authentication flag.
    ///
    /// Token and profile are left untouched. When the user is no longer authenticated, their
    /// previous values stay in place, hidden together with the gated content.
    pub(crate) fn apply_authentication_flag(&self, is_authenticated: bool) {
        self.logout_enabled.set(is_authenticated);
        self.login_enabled.set(!is_authenticated);
        self.gated_content_visible.set(is_authenticated);
    }

    pub fn snapshot(&self) -> AuthViewSnapshot {
        AuthViewSnapshot {
            login_enabled: self.login_enabled.get_untracked(),
            logout_enabled: self.logout_enabled.get_untracked(),
            gated_content_visible: self.gated_content_visible.get_untracked(),
            access_token: self.access_token.get_untracked(),
            user_profile: self.user_profile.get_untracked(),
        }
    }

    /// Returns a reactive function that pretty prints the current view-model.
    ///
    /// Useful for debugging purposes.
    pub fn pretty_printer(&self) -> impl Fn() -> String + Send + Sync + 'static + use<> {
        let this = *self;
        move || {
            // Track all fields, `snapshot` reads untracked.
            this.login_enabled.track();
            this.logout_enabled.track();
            this.gated_content_visible.track();
            this.access_token.track();
            this.user_profile.track();
            format!("{:#?}", this.snapshot())
        }
    }
}

impl Default for AuthView {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain copy of the values of an [`AuthView`] at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthViewSnapshot {
    pub login_enabled: bool,
    pub logout_enabled: bool,
    pub gated_content_visible: bool,
    pub access_token: String,
    pub user_profile: String,
}
