// crates/schemacache-core/src/config.rs
// ============================================================================
// Module: Client Configuration
// Description: Immutable construction-time configuration for the caching client.
// Purpose: Replace ambient defaults with an explicit, deserializable struct.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Client configuration is built once, is immutable thereafter, and is shared
//! by all concurrent calls on a client instance. Defaults are pure: the
//! [`Default`] impl and `#[serde(default)]` produce the same values, so a
//! configuration loads from an empty TOML/JSON document without any mutable
//! global state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default subject for registrations not tied to a named subject.
pub const DEFAULT_DUMP_SUBJECT: &str = "dumpsubject";

// ============================================================================
// SECTION: Client Config
// ============================================================================

/// Construction-time configuration for [`crate::SchemaRegistryClient`].
///
/// # Invariants
/// - Immutable once the client is constructed.
/// - With `enable_cache = false`, every resolution hits the transport.
/// - With `init_dump_subject = true`, construction forces compatibility NONE
///   on `dump_subject` and fails entirely if that call fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Subject anonymous registrations are filed under.
    pub dump_subject: String,
    /// Enables the in-memory caches (disabled means network on every call).
    pub enable_cache: bool,
    /// Forces compatibility NONE on the dump subject at construction time.
    pub init_dump_subject: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            dump_subject: DEFAULT_DUMP_SUBJECT.to_string(),
            enable_cache: true,
            init_dump_subject: false,
        }
    }
}
