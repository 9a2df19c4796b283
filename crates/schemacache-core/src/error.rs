// crates/schemacache-core/src/error.rs
// ============================================================================
// Module: Registry Error Taxonomy
// Description: Typed failures for registry transport and cache operations.
// Purpose: Keep every failure class programmatically distinguishable.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! One error enum covers the whole client surface: request construction,
//! transport-level failures, the registry's three observable outcomes
//! (not-found, backend fault, explicit error envelope), malformed responses,
//! and registry contract violations (a non-positive id). The client never
//! recovers from any of these silently and never retries; retry policy
//! belongs to the caller or the transport.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Registry Errors
// ============================================================================

/// Failures surfaced by registry transports and the caching client.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `NotFound` and `Backend` are always distinguishable; callers may treat
///   `Backend` as retryable and `NotFound` as definitive.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The outbound request could not be constructed or serialized.
    #[error("unable to build request: {0}")]
    RequestBuild(String),
    /// Network or IO failure, including timeouts, before a response decoded.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The registry reports the requested entity absent.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing entity.
        what: String,
    },
    /// Registry-side fault (5xx-equivalent); possibly transient.
    #[error("registry backend error (status {status})")]
    Backend {
        /// HTTP status code reported by the registry.
        status: u16,
    },
    /// The response decoded but lacked an expected field or carried an
    /// unparseable payload.
    #[error("invalid registry response: {0}")]
    InvalidResponse(String),
    /// The registry returned a non-positive schema id, violating its contract.
    #[error("registry returned invalid schema id: {id}")]
    InvalidId {
        /// Raw id value as received on the wire.
        id: i64,
    },
    /// The registry answered with an explicit error envelope.
    #[error("registry error {code}: {message}")]
    Registry {
        /// Registry error code (for example 40401 for a missing subject).
        code: i32,
        /// Human-readable message accompanying the code.
        message: String,
    },
}

// ============================================================================
// SECTION: Schema Parse Errors
// ============================================================================

/// Failure to parse caller-supplied schema text.
///
/// # Invariants
/// - Only produced by [`crate::Schema::parse`]; registry-sourced schema text
///   that fails to parse surfaces as [`RegistryError::InvalidResponse`]
///   instead.
#[derive(Debug, Error)]
#[error("schema parse failure: {message}")]
pub struct SchemaParseError {
    /// Parser diagnostic describing the rejection.
    pub message: String,
}
