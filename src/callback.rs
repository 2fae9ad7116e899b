use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What the identity provider handed back to us through the query string of the
/// `redirect_uri` after an interactive login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackQuery {
    /// Both `code` and `state` are present. The external client can complete the login exchange.
    Authorization(AuthorizationResponse),

    /// The provider rejected the login and told us why.
    Error(CallbackErrorResponse),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResponse {
    pub code: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackErrorResponse {
    pub error_response: ErrorResponse,
    pub state: String,
}

impl CallbackQuery {
    /// Parses a raw query string, with or without its leading `?`.
    ///
    /// Returns `None` when the query does not look like a callback at all.
    /// That is the expected result on every regular page load.
    pub fn parse(query: &str) -> Option<Self> {
        let params = query_params(query);
        let state = params.get("state")?.clone();

        if let Some(code) = params.get("code") {
            return Some(CallbackQuery::Authorization(AuthorizationResponse {
                code: code.clone(),
                state,
            }));
        }

        let error = params.get("error")?;
        let error = serde_json::from_value::<OidcErrorCode>(serde_json::Value::String(error.clone()))
            .ok()?;
        Some(CallbackQuery::Error(CallbackErrorResponse {
            error_response: ErrorResponse {
                error,
                error_description: params.get("error_description").cloned(),
                error_uri: params.get("error_uri").cloned(),
            },
            state,
        }))
    }
}

/// Whether `query` carries the authorization-callback signature: it contains both `code=` and
/// `state=`.
///
/// This is a plain substring test. A query like `?promocode=1&state=2` matches too, and the
/// external client decides whether the callback is valid.
pub fn has_callback_signature(query: &str) -> bool {
    query.contains("code=") && query.contains("state=")
}

fn query_params(query: &str) -> HashMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Error codes Auth0 redirects back with after a failed interactive login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownOidcErrorCode {
    InvalidRequest,
    UnauthorizedClient,
    /// The user declined, or a rule denied the login on their behalf.
    AccessDenied,
    UnsupportedResponseType,
    InvalidScope,
    ServerError,
    TemporarilyUnavailable,
    LoginRequired,
    ConsentRequired,
    InteractionRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OidcErrorCode {
    Known(KnownOidcErrorCode),
    Unknown(String),
}

/// Error the identity provider reported, either in the callback query or through the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: OidcErrorCode,
    pub error_description: Option<String>,
    pub error_uri: Option<String>,
}

impl ErrorResponse {
    pub fn is_access_denied(&self) -> bool {
        self.error == OidcErrorCode::Known(KnownOidcErrorCode::AccessDenied)
    }
}

#[cfg(test)]
mod tests {
    use assertr::{assert_that, prelude::*};

    use super::*;

    #[test]
    fn deserialize_known_error_code() {
        let error = "access_denied";
        let parsed = serde_json::from_str::<OidcErrorCode>(&format!("\"{error}\"")).unwrap();
        assert_that(parsed).is_equal_to(OidcErrorCode::Known(KnownOidcErrorCode::AccessDenied));
    }

    #[test]
    fn deserialize_unknown_error_code() {
        let error = "some_unknown_error";
        let parsed = serde_json::from_str::<OidcErrorCode>(&format!("\"{error}\"")).unwrap();
        assert_that(parsed).is_equal_to(OidcErrorCode::Unknown(error.to_owned()));
    }

    #[test]
    fn parse_authorization_response() {
        assert_that(CallbackQuery::parse("?code=abc&state=xyz")).is_equal_to(Some(
            CallbackQuery::Authorization(AuthorizationResponse {
                code: "abc".to_owned(),
                state: "xyz".to_owned(),
            }),
        ));
    }

    #[test]
    fn parse_without_leading_question_mark() {
        assert_that(has_callback_signature("state=xyz&code=abc")).is_true();
    }

    #[test]
    fn parse_decodes_percent_encoded_values() {
        let Some(CallbackQuery::Authorization(response)) =
            CallbackQuery::parse("?code=a%2Bb&state=x%3Dy")
        else {
            panic!("expected an authorization response");
        };
        assert_that(response.code).is_equal_to("a+b".to_owned());
        assert_that(response.state).is_equal_to("x=y".to_owned());
    }

    #[test]
    fn missing_state_is_no_callback() {
        assert_that(CallbackQuery::parse("?code=abc")).is_none();
        assert_that(has_callback_signature("?code=abc")).is_false();
    }

    #[test]
    fn missing_code_is_no_callback() {
        assert_that(has_callback_signature("?state=xyz")).is_false();
    }

    #[test]
    fn unrelated_query_is_no_callback() {
        assert_that(CallbackQuery::parse("?foo=bar")).is_none();
        assert_that(CallbackQuery::parse("")).is_none();
    }

    #[test]
    fn markers_are_matched_as_substrings() {
        assert_that(has_callback_signature("?promocode=abc&state=xyz")).is_true();
        assert_that(has_callback_signature("?code=abc&mystate=xyz")).is_true();
        assert_that(has_callback_signature("?code&state")).is_false();
    }

    #[test]
    fn parse_error_response() {
        let parsed = CallbackQuery::parse(
            "?error=access_denied&error_description=User%20did%20not%20authorize&state=xyz",
        );
        let Some(CallbackQuery::Error(CallbackErrorResponse {
            error_response,
            state,
        })) = parsed
        else {
            panic!("expected an error response");
        };
        assert_that(error_response.is_access_denied()).is_true();
        assert_that(error_response.error_description)
            .is_equal_to(Some("User did not authorize".to_owned()));
        assert_that(error_response.error_uri).is_none();
        assert_that(state).is_equal_to("xyz".to_owned());
    }

    #[test]
    fn snake_case_error_codes_are_known() {
        let parsed = serde_json::from_str::<OidcErrorCode>("\"temporarily_unavailable\"").unwrap();
        assert_that(parsed)
            .is_equal_to(OidcErrorCode::Known(KnownOidcErrorCode::TemporarilyUnavailable));
    }

    #[test]
    fn error_response_is_not_a_callback_signature() {
        assert_that(has_callback_signature("?error=login_required&state=xyz")).is_false();
    }

    #[test]
    fn unknown_error_code_is_kept() {
        let Some(CallbackQuery::Error(response)) =
            CallbackQuery::parse("?error=mfa_required&state=xyz")
        else {
            panic!("expected an error response");
        };
        assert_that(response.error_response.is_access_denied()).is_false();
        assert_that(response.error_response.error)
            .is_equal_to(OidcErrorCode::Unknown("mfa_required".to_owned()));
    }
}
