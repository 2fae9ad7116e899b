use serde::{Deserialize, Serialize};

/// Profile of the logged-in user, as reported by the external client.
///
/// See: <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
///
/// Any claim not listed here (custom namespaced claims, roles, ...) is kept in `remaining`
/// and serialized back out after the standard ones, in the order it was received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    /// (sub) Subject Identifier. A locally unique and never reassigned identifier within the
    /// issuer for the end-user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,

    /// URL of the end-user's profile picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Time the end-user's information was last updated. Providers disagree on the format
    /// (ISO 8601 string vs. seconds since epoch), so it is kept as reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<serde_json::Value>,

    #[serde(flatten)]
    pub remaining: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// The JSON form displayed in the profile field.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
