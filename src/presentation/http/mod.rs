//! HTTP Presentation
//!
//! Routes, handlers, and extractors for the HTTP API.

pub mod extractors;
pub mod handlers;
pub mod routes;
