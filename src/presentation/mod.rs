//! Presentation Layer
//!
//! HTTP routes, handlers, and extractors.

pub mod http;
