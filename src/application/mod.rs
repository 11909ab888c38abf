//! Application Layer
//!
//! Data transfer objects (DTOs) that carry payloads between the
//! presentation and domain layers.

pub mod dto;
