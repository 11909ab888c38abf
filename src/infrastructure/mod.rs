//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool and migrations (SQLite)
//! - Repository implementations

pub mod database;
pub mod repositories;
