//! Blocking `tiny_http` server for the route table.
//!
//! `tiny_http::Server::recv` blocks, so callers run [`ApiServer::serve`] on a
//! dedicated thread (`spawn_blocking` under Tokio) and stop it through a
//! [`ShutdownHandle`].

use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use genie_config::ServerConfig;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::error::ApiError;
use crate::routes::{Reply, route};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
     style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; \
     font-src 'self' https://fonts.gstatic.com; \
     img-src 'self' data: https:; \
     script-src 'self'; \
     connect-src 'self'";

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

pub struct ApiServer {
    server: Arc<Server>,
    environment: String,
    frontend_url: String,
    body_limit: u64,
}

/// Stops a running [`ApiServer::serve`] loop from another thread.
#[derive(Clone)]
pub struct ShutdownHandle(Arc<Server>);

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.0.unblock();
    }
}

impl ApiServer {
    /// # Errors
    ///
    /// Returns [`ApiError::Bind`] if the address cannot be bound.
    pub fn bind(config: &ServerConfig) -> Result<Self, ApiError> {
        let addr = config.bind_addr();
        let server = Server::http(&addr).map_err(|e| ApiError::Bind {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            server: Arc::new(server),
            environment: config.environment.clone(),
            frontend_url: config.frontend_url.clone(),
            body_limit: config.body_limit_bytes,
        })
    }

    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.server))
    }

    /// Handle requests until [`ShutdownHandle::shutdown`] is called. Blocks.
    pub fn serve(self) {
        tracing::info!(addr = ?self.local_addr(), environment = %self.environment, "API listening");
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
        tracing::info!("API stopped");
    }

    fn handle(&self, mut request: Request) {
        let started = Instant::now();
        let method = request.method().clone();
        let url = request.url().to_string();

        let reply = match self.check_body(&mut request) {
            Ok(()) => route(&method, &url, &self.environment),
            Err(error) => Err(error),
        }
        .unwrap_or_else(|error| {
            if error.status() >= 500 {
                tracing::error!(%method, %url, %error, "request failed");
            }
            Reply::from_error(&error)
        });

        let status = reply.status;
        let preflight_headers = (method == Method::Options).then(|| {
            request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Access-Control-Request-Headers"))
                .map(|h| h.value.as_str().to_string())
        });
        let response = self.respond_with(reply, preflight_headers);
        if let Err(error) = request.respond(response) {
            tracing::debug!(%url, %error, "failed to write response");
        }
        tracing::info!(
            %method,
            %url,
            status,
            elapsed_ms = started.elapsed().as_millis(),
            "request"
        );
    }

    /// Enforce the body limit and reject malformed JSON bodies.
    fn check_body(&self, request: &mut Request) -> Result<(), ApiError> {
        let limit = self.body_limit;
        if request
            .body_length()
            .is_some_and(|len| u64::try_from(len).unwrap_or(u64::MAX) > limit)
        {
            return Err(ApiError::PayloadTooLarge { limit });
        }

        let is_json = request.headers().iter().any(|h| {
            h.field.equiv("Content-Type") && h.value.as_str().starts_with("application/json")
        });
        let mut body = Vec::new();
        request
            .as_reader()
            .take(limit.saturating_add(1))
            .read_to_end(&mut body)?;
        if u64::try_from(body.len()).unwrap_or(u64::MAX) > limit {
            return Err(ApiError::PayloadTooLarge { limit });
        }
        if is_json && !body.is_empty() {
            serde_json::from_slice::<serde_json::Value>(&body)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        }
        Ok(())
    }

    fn respond_with(
        &self,
        reply: Reply,
        preflight_headers: Option<Option<String>>,
    ) -> Response<std::io::Cursor<Vec<u8>>> {
        let body = reply.body.map(|b| b.to_string()).unwrap_or_default();
        let mut headers = vec![
            ("Access-Control-Allow-Origin", self.frontend_url.clone()),
            ("Access-Control-Allow-Credentials", "true".to_string()),
            ("Vary", "Origin".to_string()),
            ("Content-Security-Policy", CONTENT_SECURITY_POLICY.to_string()),
            ("X-Content-Type-Options", "nosniff".to_string()),
            ("X-Frame-Options", "SAMEORIGIN".to_string()),
        ];
        if let Some(requested) = preflight_headers {
            headers.push(("Access-Control-Allow-Methods", ALLOWED_METHODS.to_string()));
            if let Some(requested) = requested {
                headers.push(("Access-Control-Allow-Headers", requested));
            }
        } else {
            headers.push(("Content-Type", "application/json; charset=utf-8".to_string()));
        }

        headers
            .into_iter()
            .filter_map(|(name, value)| Header::from_bytes(name.as_bytes(), value.as_bytes()).ok())
            .fold(
                Response::from_string(body).with_status_code(reply.status),
                Response::with_header,
            )
    }
}
