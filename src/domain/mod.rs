//! # Domain Layer
//!
//! The domain layer contains the core business logic of the artist registry.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain behavior

pub mod artist;

// Re-export commonly used types
pub use artist::*;
