//! Backend Error Module
//!
//! Error types for the HTTP API. Every handler returns [`ApiError`] on the
//! failure path; the conversion module maps each variant to a status code
//! and a small JSON body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
