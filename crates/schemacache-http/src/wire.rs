// crates/schemacache-http/src/wire.rs
// ============================================================================
// Module: Registry Wire Types
// Description: Typed request bodies and response envelopes for the registry API.
// Purpose: Decode each response once, with explicit optional error fields.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The registry answers every route with either the operation's payload field
//! or an `error_code`/`message` pair. Each envelope models both as `Option`s
//! so one decode settles which variant arrived; the transport then maps the
//! combination onto the core error taxonomy.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Request Bodies
// ============================================================================

/// Body for `POST /subjects/{subject}/versions`.
#[derive(Debug, Serialize)]
pub(crate) struct RegisterSchemaRequest<'a> {
    /// Textual schema being registered.
    pub(crate) schema: &'a str,
}

/// Body for `PUT /config/{subject}`.
#[derive(Debug, Serialize)]
pub(crate) struct SetCompatibilityRequest<'a> {
    /// Requested compatibility level wire string.
    pub(crate) compatibility: &'a str,
}

// ============================================================================
// SECTION: Response Envelopes
// ============================================================================

/// Envelope for registration responses.
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterSchemaResponse {
    /// Assigned schema id on success.
    pub(crate) id: Option<i64>,
    /// Registry error code on failure.
    pub(crate) error_code: Option<i32>,
    /// Registry error message accompanying the code.
    pub(crate) message: Option<String>,
}

/// Envelope for schema-by-id responses.
#[derive(Debug, Deserialize)]
pub(crate) struct FetchSchemaResponse {
    /// Textual schema on success.
    pub(crate) schema: Option<String>,
    /// Registry error code on failure.
    pub(crate) error_code: Option<i32>,
    /// Registry error message accompanying the code.
    pub(crate) message: Option<String>,
}

/// Envelope for compatibility update responses.
#[derive(Debug, Deserialize)]
pub(crate) struct CompatibilityResponse {
    /// Compatibility level now in effect, as reported by the registry.
    pub(crate) compatibility: Option<String>,
    /// Registry error code on failure.
    pub(crate) error_code: Option<i32>,
    /// Registry error message accompanying the code.
    pub(crate) message: Option<String>,
}
