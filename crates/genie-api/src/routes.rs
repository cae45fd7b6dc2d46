//! Route table for `/api/*`.
//!
//! Every route other than health answers with a placeholder envelope. Routing
//! is a pure function of method and URL so it can be tested without a socket.

use genie_core::envelope::{ApiEnvelope, HealthStatus};
use serde_json::{Value, json};
use tiny_http::Method;

use crate::error::ApiError;

const CHAT_GREETING: &str =
    "Hello! I'm Travel Genie, your AI travel assistant. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StubData {
    Null,
    EmptyList,
    ChatGreeting,
}

impl StubData {
    fn to_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::EmptyList => json!([]),
            Self::ChatGreeting => json!({ "response": CHAT_GREETING }),
        }
    }
}

struct Stub {
    method: &'static str,
    path: &'static str,
    status: u16,
    message: &'static str,
    data: StubData,
}

const fn stub(
    method: &'static str,
    path: &'static str,
    status: u16,
    message: &'static str,
    data: StubData,
) -> Stub {
    Stub {
        method,
        path,
        status,
        message,
        data,
    }
}

static STUBS: &[Stub] = &[
    stub("POST", "/api/auth/register", 201, "User registration endpoint - coming soon", StubData::Null),
    stub("POST", "/api/auth/login", 200, "User login endpoint - coming soon", StubData::Null),
    stub("POST", "/api/auth/logout", 200, "User logout endpoint - coming soon", StubData::Null),
    stub("GET", "/api/auth/me", 200, "Get current user endpoint - coming soon", StubData::Null),
    stub("GET", "/api/users/profile", 200, "Get user profile endpoint - coming soon", StubData::Null),
    stub("PUT", "/api/users/profile", 200, "Update user profile endpoint - coming soon", StubData::Null),
    stub("GET", "/api/places/search", 200, "Place search endpoint - coming soon", StubData::EmptyList),
    stub("GET", "/api/places/recommendations", 200, "Place recommendations endpoint - coming soon", StubData::EmptyList),
    stub("GET", "/api/places/saved", 200, "Get saved places endpoint - coming soon", StubData::EmptyList),
    stub("POST", "/api/places/save", 201, "Save place endpoint - coming soon", StubData::Null),
    stub("POST", "/api/chat/message", 200, "AI chat endpoint - coming soon", StubData::ChatGreeting),
    stub("GET", "/api/chat/history", 200, "Get chat history endpoint - coming soon", StubData::EmptyList),
    stub("POST", "/api/itinerary/generate", 200, "AI itinerary generation endpoint - coming soon", StubData::Null),
    stub("GET", "/api/itinerary", 200, "Get itineraries endpoint - coming soon", StubData::EmptyList),
    stub("GET", "/api/emergency/contacts", 200, "Get emergency contacts endpoint - coming soon", StubData::EmptyList),
    stub("POST", "/api/emergency/panic", 200, "Panic mode triggered endpoint - coming soon", StubData::Null),
];

/// Status and JSON body of a handled request. `body` is `None` for 204.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// Failure envelope for `error`, with the error's status.
    #[must_use]
    pub fn from_error(error: &ApiError) -> Self {
        let envelope = ApiEnvelope::error(error.to_string());
        Self::json(
            error.status(),
            serde_json::to_value(envelope).unwrap_or(Value::Null),
        )
    }
}

/// Resolve a request to its reply.
///
/// `url` may carry a query string; it is ignored for matching but echoed in
/// the 404 message. HEAD is answered like GET.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if a response body fails to serialize.
pub fn route(method: &Method, url: &str, environment: &str) -> Result<Reply, ApiError> {
    let path = normalize(url);
    let method = match method {
        Method::Options => {
            return Ok(Reply {
                status: 204,
                body: None,
            });
        }
        Method::Head => &Method::Get,
        other => other,
    };

    if *method == Method::Get && path == "/api/health" {
        let health = HealthStatus::running(environment);
        return Ok(Reply::json(200, serde_json::to_value(health)?));
    }

    if let Some(stub) = STUBS
        .iter()
        .find(|s| s.method == method.as_str() && s.path == path)
    {
        let envelope = ApiEnvelope::ok(stub.message, stub.data.to_value());
        return Ok(Reply::json(stub.status, serde_json::to_value(envelope)?));
    }

    let envelope = ApiEnvelope::error(format!("Not Found - {url}"));
    Ok(Reply::json(404, serde_json::to_value(envelope)?))
}

/// Strip the query string and any trailing slash.
fn normalize(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
