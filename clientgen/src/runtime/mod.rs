//! Support code for generated clients.
//!
//! Generated `api.rs` files describe each endpoint as a [Route] and use this module to turn a call
//! into a [Request] and send it through a user-supplied [HttpClient].

use crate::model::Method;

pub use route::{Request, Route};

mod route;

/// Opaque error from an [HttpClient]. It is passed on unchanged inside
/// [crate::Error::Transport].
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Raw response of an [HttpClient].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl ToString) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// The transport used by generated clients. Implementations own socket I/O, TLS, timeouts and
/// retries; generated code only calls [HttpClient::request] once per endpoint call.
pub trait HttpClient {
    fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
    ) -> std::result::Result<Response, TransportError>;
}

impl<F> HttpClient for F
where
    F: Fn(Method, &str, Option<&str>) -> std::result::Result<Response, TransportError>,
{
    fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
    ) -> std::result::Result<Response, TransportError> {
        self(method, url, body)
    }
}
