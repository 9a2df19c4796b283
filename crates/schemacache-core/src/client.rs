// crates/schemacache-core/src/client.rs
// ============================================================================
// Module: Caching Registry Client
// Description: Bidirectional schema/id resolution backed by two in-memory caches.
// Purpose: De-duplicate registrations and avoid network round trips on repeat lookups.
// Dependencies: crate::transport, crate::schema, crate::config
// ============================================================================

//! ## Overview
//! The client owns two independent lookup tables: fingerprint to id and id to
//! schema. Each is guarded by its own reader/writer lock; cache hits take a
//! shared read lock and perform no network I/O, misses release the lock,
//! delegate to the [`RegistryTransport`], and opportunistically populate the
//! table under an exclusive write lock. Network calls are made with no lock
//! held so a slow registry call never stalls hits on unrelated entries.
//!
//! Both tables are append-only. Correctness relies on the registry's own
//! append-only semantics: an id, once assigned to content, is never
//! reassigned, so there is no eviction, expiry, or invalidation.
//!
//! Concurrency caveat: two concurrent misses on the same key may both issue
//! the network call and both populate the table. Entries are idempotent, so
//! the last write wins and the extra call is wasted but harmless. Callers
//! that require exactly-once registration must serialize externally.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::compatibility::CompatibilityLevel;
use crate::config::ClientConfig;
use crate::error::RegistryError;
use crate::identifiers::SchemaId;
use crate::schema::Schema;
use crate::schema::SchemaFingerprint;
use crate::transport::RegistryTransport;

// ============================================================================
// SECTION: Client
// ============================================================================

/// Caching schema registry client.
///
/// # Invariants
/// - Every id-cache entry was confirmed by the registry for that exact
///   schema content; invalid ids are rejected by the transport boundary and
///   never inserted.
/// - The two tables' locks are never held simultaneously by one operation,
///   and no lock is held across a network call.
/// - Safe to share across threads; all methods take `&self`.
pub struct SchemaRegistryClient<T> {
    /// Transport performing the registry's three network operations.
    transport: T,
    /// Immutable construction-time configuration.
    config: ClientConfig,
    /// Fingerprint-to-id table, append-only.
    ids_by_fingerprint: RwLock<BTreeMap<SchemaFingerprint, SchemaId>>,
    /// Id-to-schema table, append-only.
    schemas_by_id: RwLock<BTreeMap<SchemaId, Schema>>,
}

impl<T: RegistryTransport> SchemaRegistryClient<T> {
    /// Creates a client over the given transport and configuration.
    ///
    /// When [`ClientConfig::init_dump_subject`] is set, this forces
    /// compatibility NONE on the dump subject before the client exists; a
    /// failure there aborts construction — there is no partially-usable
    /// client.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the dump-subject initialization call
    /// fails.
    pub fn new(transport: T, config: ClientConfig) -> Result<Self, RegistryError> {
        if config.init_dump_subject {
            transport.set_compatibility(&config.dump_subject, CompatibilityLevel::None)?;
        }
        Ok(Self {
            transport,
            config,
            ids_by_fingerprint: RwLock::new(BTreeMap::new()),
            schemas_by_id: RwLock::new(BTreeMap::new()),
        })
    }

    /// Resolves a schema to its registry-assigned id.
    ///
    /// On a cache hit this performs no network I/O. On a miss the schema is
    /// registered under the configured dump subject and the confirmed id is
    /// cached. First-ever sight of a fingerprint therefore causes exactly one
    /// best-effort registration call; see the module docs for the concurrent
    /// miss window.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when registration fails or the registry
    /// violates its id contract; nothing is cached on any failure.
    pub fn resolve_id(&self, schema: &Schema) -> Result<SchemaId, RegistryError> {
        if !self.config.enable_cache {
            return self.transport.register_schema(&self.config.dump_subject, schema);
        }
        let fingerprint = schema.fingerprint();
        if let Some(id) = read_table(&self.ids_by_fingerprint).get(&fingerprint).copied() {
            return Ok(id);
        }
        // Miss: register with no lock held, then populate (last writer wins).
        let id = self.transport.register_schema(&self.config.dump_subject, schema)?;
        write_table(&self.ids_by_fingerprint).insert(fingerprint, id);
        Ok(id)
    }

    /// Resolves an id to the schema registered under it.
    ///
    /// On a cache hit this performs no network I/O. On a miss the schema is
    /// fetched from the registry, cached, and returned; the returned value is
    /// the exact parse of the registry's canonical textual form and is never
    /// mutated after caching.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when the registry does not know
    /// the id and [`RegistryError::Backend`] on registry-side faults (which
    /// may be retryable later); nothing is cached on any failure.
    pub fn resolve_schema(&self, id: SchemaId) -> Result<Schema, RegistryError> {
        if !self.config.enable_cache {
            return self.transport.fetch_schema(id);
        }
        if let Some(schema) = read_table(&self.schemas_by_id).get(&id).cloned() {
            return Ok(schema);
        }
        let schema = self.transport.fetch_schema(id)?;
        write_table(&self.schemas_by_id).insert(id, schema.clone());
        Ok(schema)
    }

    /// Sets a subject's compatibility level.
    ///
    /// Compatibility policy is registry-owned mutable state, not
    /// content-addressed, so nothing is cached. The returned level is
    /// whatever the registry reports as now in effect, which may legitimately
    /// differ from the requested one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Registry`] when the registry answers with an
    /// explicit error envelope, and the remaining variants for transport or
    /// decode failures.
    pub fn set_compatibility(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> Result<CompatibilityLevel, RegistryError> {
        self.transport.set_compatibility(subject, level)
    }

    /// Returns the client's configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

// ============================================================================
// SECTION: Lock Helpers
// ============================================================================

/// Acquires a shared read guard, recovering from poisoning.
///
/// Writers only insert validated entries, so a panicked writer cannot leave a
/// table partially mutated; continuing with the inner data preserves the
/// append-only invariant.
fn read_table<K, V>(table: &RwLock<BTreeMap<K, V>>) -> RwLockReadGuard<'_, BTreeMap<K, V>> {
    table.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquires an exclusive write guard, recovering from poisoning.
fn write_table<K, V>(table: &RwLock<BTreeMap<K, V>>) -> RwLockWriteGuard<'_, BTreeMap<K, V>> {
    table.write().unwrap_or_else(PoisonError::into_inner)
}
