use leptos_auth_controller::{
    AuthClient, AuthStateController, AuthView, ClientConfig, ClientError, Location, LoginOptions,
    LogoutOptions, UseAuthOptions, UserProfile, url::Url,
};
use std::cell::RefCell;
use std::rc::Rc;

pub mod tracing {
    pub fn init_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(::tracing::Level::TRACE)
            .try_init();
    }
}

/// Everything observable from the outside, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Init,
    LoginWithRedirect,
    Logout,
    IsAuthenticated,
    GetTokenSilently,
    GetUser,
    HandleRedirectCallback,
    StripQuery,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub calls: Vec<Call>,
    pub failing: Vec<Call>,
    pub authenticated: bool,
    pub authenticate_on_callback: bool,
    pub token: String,
    pub user: Option<UserProfile>,
    pub query: String,
    pub init_config: Option<ClientConfig>,
    pub login_options: Option<LoginOptions>,
    pub logout_options: Option<LogoutOptions>,
}

/// Scripted identity provider SDK. Shares its state with the [`FakeLocation`] it was created with.
#[derive(Debug, Clone)]
pub struct FakeClient {
    state: Rc<RefCell<FakeState>>,
}

#[derive(Debug, Clone)]
pub struct FakeLocation {
    state: Rc<RefCell<FakeState>>,
}

pub struct Fakes {
    pub state: Rc<RefCell<FakeState>>,
}

impl Fakes {
    pub fn new(authenticated: bool, query: &str) -> Self {
        let state = FakeState {
            authenticated,
            token: "access-token".to_owned(),
            user: Some(UserProfile {
                sub: Some("auth0|123".to_owned()),
                name: Some("Jane Doe".to_owned()),
                ..Default::default()
            }),
            query: query.to_owned(),
            ..Default::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn authenticate_on_callback(self) -> Self {
        self.state.borrow_mut().authenticate_on_callback = true;
        self
    }

    pub fn failing(self, call: Call) -> Self {
        self.state.borrow_mut().failing.push(call);
        self
    }

    pub fn client(&self) -> FakeClient {
        FakeClient {
            state: Rc::clone(&self.state),
        }
    }

    pub fn location(&self) -> FakeLocation {
        FakeLocation {
            state: Rc::clone(&self.state),
        }
    }

    pub fn controller(&self) -> AuthStateController<FakeClient, FakeLocation> {
        AuthStateController::new(options(), self.client(), self.location(), AuthView::new())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|it| **it == call)
            .count()
    }

    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }
}

pub fn options() -> UseAuthOptions {
    UseAuthOptions {
        domain: "tenant.auth0.com".to_owned(),
        client_id: "test-client".to_owned(),
        redirect_uri: Url::parse("http://127.0.0.1:3000/").unwrap(),
        return_to: Url::parse("http://127.0.0.1:3000/goodbye").unwrap(),
    }
}

impl FakeClient {
    fn record(&self, call: Call) -> Result<(), ClientError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.failing.contains(&call) {
            return Err(ClientError::Rejected {
                message: format!("{call:?} failed"),
            });
        }
        Ok(())
    }
}

impl AuthClient for FakeClient {
    async fn init(&self, config: &ClientConfig) -> Result<(), ClientError> {
        self.record(Call::Init)?;
        self.state.borrow_mut().init_config = Some(config.clone());
        Ok(())
    }

    async fn login_with_redirect(&self, options: &LoginOptions) -> Result<(), ClientError> {
        self.record(Call::LoginWithRedirect)?;
        self.state.borrow_mut().login_options = Some(options.clone());
        Ok(())
    }

    async fn logout(&self, options: &LogoutOptions) -> Result<(), ClientError> {
        self.record(Call::Logout)?;
        self.state.borrow_mut().logout_options = Some(options.clone());
        Ok(())
    }

    async fn is_authenticated(&self) -> Result<bool, ClientError> {
        self.record(Call::IsAuthenticated)?;
        Ok(self.state.borrow().authenticated)
    }

    async fn get_token_silently(&self) -> Result<String, ClientError> {
        self.record(Call::GetTokenSilently)?;
        Ok(self.state.borrow().token.clone())
    }

    async fn get_user(&self) -> Result<Option<UserProfile>, ClientError> {
        self.record(Call::GetUser)?;
        Ok(self.state.borrow().user.clone())
    }

    async fn handle_redirect_callback(&self) -> Result<(), ClientError> {
        self.record(Call::HandleRedirectCallback)?;
        let mut state = self.state.borrow_mut();
        if state.authenticate_on_callback {
            state.authenticated = true;
        }
        Ok(())
    }
}

impl Location for FakeLocation {
    fn search(&self) -> String {
        self.state.borrow().query.clone()
    }

    fn strip_query(&self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::StripQuery);
        state.query = String::new();
    }
}
