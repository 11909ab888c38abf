//! # Artist Registry Library
//!
//! This crate provides a comic artist registry with:
//! - A RESTful CRUD API for the artist resource
//! - SQLite for persistent storage, with ids allocated by the table's
//!   own auto-increment sequence
//! - Strict request validation with field-level error reporting
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The artist entity and its repository trait
//! - **Application Layer**: Request/response DTOs and payload projection
//! - **Infrastructure Layer**: SQLite pool, migrations, and the repository
//!   implementation
//! - **Presentation Layer**: HTTP routes, handlers, and extractors
//!
//! ## Module Structure
//!
//! ```text
//! artist_registry/
//! +-- config/        Configuration management
//! +-- domain/        Artist entity and repository trait
//! +-- application/   Request/response DTOs
//! +-- infrastructure/ Database pool and SQLite repository
//! +-- presentation/  HTTP routes, handlers, and extractors
//! +-- shared/        Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - DTOs and payload projection
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
