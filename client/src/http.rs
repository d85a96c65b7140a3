//! HTTP transport types and the `Transport` seam.
//!
//! # Design
//! Requests and responses are plain data. The library builds `HttpRequest`
//! values and parses `HttpResponse` values; the actual round-trip happens
//! behind the [`Transport`] trait. Controller tests swap in a scripted
//! transport and never open a socket; the CLI plugs in
//! [`crate::transport::UreqTransport`].

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data. Non-2xx statuses are carried
/// here as data, not as transport errors; status interpretation belongs to
/// the `parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one HTTP round-trip. Implementations return `Err` only for
/// transport-level failures; any response the server produced, whatever its
/// status, comes back as `Ok`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
