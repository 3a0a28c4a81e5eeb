//! Query and reply value objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the query endpoint, relative to the configured base URL.
pub const QUERY_PATH: &str = "/api/query";

/// Bot text shown when a reply carries no usable `response`.
pub const MISSING_REPLY_TEXT: &str = "undefined";

/// Text captured from the input control at the moment of dispatch (Value Object)
///
/// Unlike most inputs this is never trimmed or validated: whatever the user
/// typed, including the empty string, is sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryText(String);

impl QueryText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for QueryText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QueryText {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QueryText {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Wire body of a query request: `{"query": "<text>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: QueryText,
}

impl QueryRequest {
    pub fn new(query: impl Into<QueryText>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// JSON reply of the query endpoint
///
/// Only `response` matters for rendering. The server answers with an
/// `error` field instead when it rejects the query (for example an empty
/// query), so both are optional and unknown fields are ignored. A reply
/// without `response` is still a reply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ResponsePayload {
    /// Build a payload carrying a plain text reply.
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: Some(Value::String(response.into())),
            error: None,
        }
    }

    /// The reply text to render for the bot.
    ///
    /// String replies are returned verbatim; any other JSON value is rendered
    /// as compact JSON text. A missing or `null` response becomes
    /// [`MISSING_REPLY_TEXT`].
    pub fn reply_text(&self) -> String {
        match &self.response {
            Some(Value::Null) | None => MISSING_REPLY_TEXT.to_string(),
            Some(value) => value_text(value),
        }
    }

    /// The server's `error` field, if it sent one.
    pub fn server_error(&self) -> Option<String> {
        self.error.as_ref().map(value_text)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
