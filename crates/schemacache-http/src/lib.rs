// crates/schemacache-http/src/lib.rs
// ============================================================================
// Module: Schemacache HTTP Transport
// Description: HTTP/JSON implementation of the registry transport contract.
// Purpose: Speak the registry's versioned JSON API over a blocking HTTP client.
// Dependencies: schemacache-core, reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate ships the single HTTP implementation of
//! [`schemacache_core::RegistryTransport`]. Requests and responses are typed
//! structs decoded once — there is no dynamic-map decoding anywhere — and
//! every registry outcome maps onto the core error taxonomy so callers can
//! tell not-found, backend faults, and explicit registry errors apart.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod transport;
mod wire;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use transport::DEFAULT_REGISTRY_URL;
pub use transport::HttpRegistryTransport;
pub use transport::HttpTransportConfig;
pub use transport::REGISTRY_MEDIA_TYPE;
