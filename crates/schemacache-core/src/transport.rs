// crates/schemacache-core/src/transport.rs
// ============================================================================
// Module: Registry Transport Contract
// Description: Backend-agnostic interface to a remote schema registry.
// Purpose: Define the single boundary the caching client depends on.
// Dependencies: crate::schema, crate::identifiers, crate::compatibility
// ============================================================================

//! ## Overview
//! The transport performs the three network operations the caching client
//! needs and nothing more. Implementations must map the registry's observable
//! outcomes onto the [`RegistryError`] taxonomy (not-found, backend fault,
//! and explicit error envelopes each stay distinguishable), enforce their
//! configured deadline, and leave retry policy to the caller. One HTTP/JSON
//! implementation ships in `schemacache-http`; tests substitute doubles with
//! canned responses.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::compatibility::CompatibilityLevel;
use crate::error::RegistryError;
use crate::identifiers::SchemaId;
use crate::schema::Schema;

// ============================================================================
// SECTION: Registry Transport
// ============================================================================

/// Backend-agnostic schema registry transport.
pub trait RegistryTransport {
    /// Registers a schema under a subject, returning the assigned id.
    ///
    /// A wire id outside the valid range must surface as
    /// [`RegistryError::InvalidId`], never as a constructed [`SchemaId`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the request cannot be built or sent,
    /// when the registry reports a fault, or when the response is malformed.
    fn register_schema(&self, subject: &str, schema: &Schema) -> Result<SchemaId, RegistryError>;

    /// Fetches the schema registered under an id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when the id is unknown to the
    /// registry, [`RegistryError::Backend`] on registry-side faults, and the
    /// remaining variants for transport or decode failures.
    fn fetch_schema(&self, id: SchemaId) -> Result<Schema, RegistryError>;

    /// Sets a subject's compatibility level, returning the level now in
    /// effect (which may legitimately differ from the requested one).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Registry`] when the registry answers with an
    /// explicit error envelope, and the remaining variants for transport or
    /// decode failures.
    fn set_compatibility(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> Result<CompatibilityLevel, RegistryError>;
}

impl<T: RegistryTransport + ?Sized> RegistryTransport for Arc<T> {
    fn register_schema(&self, subject: &str, schema: &Schema) -> Result<SchemaId, RegistryError> {
        self.as_ref().register_schema(subject, schema)
    }

    fn fetch_schema(&self, id: SchemaId) -> Result<Schema, RegistryError> {
        self.as_ref().fetch_schema(id)
    }

    fn set_compatibility(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> Result<CompatibilityLevel, RegistryError> {
        self.as_ref().set_compatibility(subject, level)
    }
}
