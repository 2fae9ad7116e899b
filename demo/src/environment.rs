//! Identity provider configuration. Read at build time from `AUTH0_DOMAIN` and `AUTH0_CLIENT_ID`,
//! overridable at runtime through `window.AUTH0_CONFIG`. These values are public.

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub struct Environment {
    pub domain: String,
    pub client_id: String,
}

impl Environment {
    pub fn load() -> Self {
        let mut env = Self {
            domain: option_env!("AUTH0_DOMAIN").unwrap_or("").to_owned(),
            client_id: option_env!("AUTH0_CLIENT_ID").unwrap_or("").to_owned(),
        };

        if let Some(runtime) = runtime_config() {
            if let Some(domain) = read_runtime_value(&runtime, "domain") {
                env.domain = domain;
            }
            if let Some(client_id) = read_runtime_value(&runtime, "client_id") {
                env.client_id = client_id;
            }
        }

        if env.domain.is_empty() || env.client_id.is_empty() {
            tracing::warn!(?env, "Auth0 domain or client id missing. Logging in will fail.");
        }
        env
    }
}

fn runtime_config() -> Option<Object> {
    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AUTH0_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    Some(Object::from(config))
}

fn read_runtime_value(object: &Object, key: &str) -> Option<String> {
    Reflect::get(object, &JsValue::from_str(key))
        .ok()?
        .as_string()
        .filter(|value| !value.trim().is_empty())
}
