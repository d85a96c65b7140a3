//! Client library for the items service.
//!
//! # Overview
//! Keeps a local copy of the server's item collection synchronized after
//! every mutation. Three layers:
//!
//! - [`ItemsApi`] — stateless: builds `HttpRequest` values and parses
//!   `HttpResponse` values, no I/O.
//! - [`ItemsController`] — the client state: the local `items` copy, the id
//!   in edit mode, and the last error. Every mutation is followed by a full
//!   list re-fetch rather than an optimistic local patch.
//! - [`Transport`] — the I/O seam; [`UreqTransport`] for real use, scripted
//!   transports in tests.
//!
//! DTOs are defined independently from the server crate; end-to-end tests
//! catch schema drift.

pub mod api;
pub mod controller;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::ItemsApi;
pub use controller::ItemsController;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::UreqTransport;
pub use types::{Item, ItemInput};
