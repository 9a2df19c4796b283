// crates/schemacache-core/src/lib.rs
// ============================================================================
// Module: Schemacache Core
// Description: Caching schema registry client, schema model, and transport contract.
// Purpose: Resolve schemas to registry identifiers (and back) with in-memory caches.
// Dependencies: apache-avro, serde, sha2, thiserror
// ============================================================================

//! ## Overview
//! This crate owns the caching client at the heart of Schemacache. A
//! [`SchemaRegistryClient`] resolves a parsed [`Schema`] to its
//! registry-assigned [`SchemaId`] and an id back to its schema, consulting two
//! append-only in-memory caches before delegating to a [`RegistryTransport`].
//! Transports are external collaborators (one HTTP/JSON implementation ships
//! in `schemacache-http`); the client never constructs requests itself.
//! Invariants:
//! - Cached ids were confirmed by the registry for that exact schema content.
//! - Caches only grow; the registry never reassigns an id to new content.
//! - Every failure surfaces as a typed [`RegistryError`]; nothing is retried.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod schema;
pub mod transport;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::SchemaRegistryClient;
pub use compatibility::CompatibilityLevel;
pub use compatibility::UnknownCompatibilityLevel;
pub use config::ClientConfig;
pub use config::DEFAULT_DUMP_SUBJECT;
pub use error::RegistryError;
pub use error::SchemaParseError;
pub use identifiers::SchemaId;
pub use schema::Schema;
pub use schema::SchemaFingerprint;
pub use transport::RegistryTransport;
