use serde::Serialize;
use serde_json::json;

/// Status code returned for every invocation
pub const STATUS_OK: u16 = 200;

/// Message placed in the response body
pub const MESSAGE: &str = "Amazing!";

/// HTTP style proxy response returned to the invoking platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    /// JSON encoded `{ "message": .. }` object
    pub body: String,
}

impl Response {
    /// Create the fixed success response
    pub fn amazing() -> Self {
        Self {
            status_code: STATUS_OK,
            body: json!({ "message": MESSAGE }).to_string(),
        }
    }
}
