use url::Url;
use wasm_bindgen::JsValue;

/// The current location of the page, as far as the controller cares about it.
pub trait Location {
    /// The raw query string including its leading `?`, or an empty string.
    fn search(&self) -> String;

    /// Removes query and fragment from the visible location, keeping the current path.
    /// Must not trigger a navigation.
    fn strip_query(&self);
}

/// [`Location`] backed by `window.location` and `window.history`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl BrowserLocation {
    /// The origin of the current page, e.g. `http://127.0.0.1:3000/`.
    pub fn origin() -> Option<Url> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Url::parse(&origin)
            .inspect_err(|err| tracing::error!(?err, %origin, "Could not parse location origin."))
            .ok()
    }
}

impl Location for BrowserLocation {
    fn search(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        window.location().search().unwrap_or_else(|err| {
            tracing::error!(?err, "Could not read query string of current location.");
            String::new()
        })
    }

    fn strip_query(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let path = match window.location().pathname() {
            Ok(path) => path,
            Err(err) => {
                tracing::error!(?err, "Could not read path of current location.");
                return;
            }
        };
        let result = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&path)));
        if let Err(err) = result {
            tracing::error!(?err, "Could not remove query parameters from current location.");
        }
    }
}
