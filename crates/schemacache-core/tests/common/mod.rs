// crates/schemacache-core/tests/common/mod.rs
// ============================================================================
// Module: Shared Cache Test Helpers
// Description: Scripted stub transport and fixture schemas for cache tests.
// Purpose: Exercise the caching client without any network.
// Dependencies: schemacache-core
// ============================================================================

//! ## Overview
//! A [`StubTransport`] answers each transport operation with a
//! closure-configured canned result and counts invocations, so tests can
//! assert exactly how many network calls a cache path performed.

#![allow(dead_code, reason = "Shared helpers are not used by every test binary.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use schemacache_core::CompatibilityLevel;
use schemacache_core::RegistryError;
use schemacache_core::RegistryTransport;
use schemacache_core::Schema;
use schemacache_core::SchemaId;

// ============================================================================
// SECTION: Fixture Schemas
// ============================================================================

/// Record schema used across the cache tests.
pub const REC_SCHEMA_TEXT: &str = r#"{"type":"record","name":"rec_schema","fields":[{"name":"f1","type":"string"},{"name":"f2","type":"string"}]}"#;

/// Parses the fixture record schema.
pub fn rec_schema() -> Schema {
    Schema::parse(REC_SCHEMA_TEXT).unwrap()
}

/// Builds a schema id from a raw value known to be valid.
pub fn schema_id(raw: i64) -> SchemaId {
    SchemaId::from_raw(raw).unwrap()
}

// ============================================================================
// SECTION: Stub Transport
// ============================================================================

/// Canned register handler.
type RegisterFn = Box<dyn Fn(&str, &Schema) -> Result<SchemaId, RegistryError> + Send + Sync>;
/// Canned fetch handler.
type FetchFn = Box<dyn Fn(SchemaId) -> Result<Schema, RegistryError> + Send + Sync>;
/// Canned compatibility handler.
type CompatFn =
    Box<dyn Fn(&str, CompatibilityLevel) -> Result<CompatibilityLevel, RegistryError> + Send + Sync>;

/// Scripted registry transport with per-operation call counters.
pub struct StubTransport {
    /// Handler for register calls.
    register: RegisterFn,
    /// Handler for fetch calls.
    fetch: FetchFn,
    /// Handler for compatibility calls.
    compat: CompatFn,
    /// Number of register calls observed.
    pub register_calls: AtomicUsize,
    /// Number of fetch calls observed.
    pub fetch_calls: AtomicUsize,
    /// Number of compatibility calls observed.
    pub compat_calls: AtomicUsize,
}

impl StubTransport {
    /// Creates a stub whose every operation fails as an unexpected call.
    pub fn new() -> Self {
        Self {
            register: Box::new(|_, _| Err(unexpected("register_schema"))),
            fetch: Box::new(|_| Err(unexpected("fetch_schema"))),
            compat: Box::new(|_, _| Err(unexpected("set_compatibility"))),
            register_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
            compat_calls: AtomicUsize::new(0),
        }
    }

    /// Replaces the register handler.
    pub fn on_register(
        mut self,
        handler: impl Fn(&str, &Schema) -> Result<SchemaId, RegistryError> + Send + Sync + 'static,
    ) -> Self {
        self.register = Box::new(handler);
        self
    }

    /// Replaces the fetch handler.
    pub fn on_fetch(
        mut self,
        handler: impl Fn(SchemaId) -> Result<Schema, RegistryError> + Send + Sync + 'static,
    ) -> Self {
        self.fetch = Box::new(handler);
        self
    }

    /// Replaces the compatibility handler.
    pub fn on_compat(
        mut self,
        handler: impl Fn(&str, CompatibilityLevel) -> Result<CompatibilityLevel, RegistryError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.compat = Box::new(handler);
        self
    }
}

impl RegistryTransport for StubTransport {
    fn register_schema(&self, subject: &str, schema: &Schema) -> Result<SchemaId, RegistryError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        (self.register)(subject, schema)
    }

    fn fetch_schema(&self, id: SchemaId) -> Result<Schema, RegistryError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        (self.fetch)(id)
    }

    fn set_compatibility(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> Result<CompatibilityLevel, RegistryError> {
        self.compat_calls.fetch_add(1, Ordering::SeqCst);
        (self.compat)(subject, level)
    }
}

/// Builds the failure returned for operations a test did not script.
fn unexpected(operation: &str) -> RegistryError {
    RegistryError::Transport(format!("stub transport: unexpected call to {operation}"))
}
