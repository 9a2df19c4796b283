// system-tests/src/lib.rs
// ============================================================================
// Module: Schemacache System Tests Library
// Description: Crate root for the live-registry system-test binaries.
// Purpose: Host the feature-gated system tests in system-tests/tests.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate exists to host the system-test binaries in `system-tests/tests`.
//! They exercise the caching client against a real schema registry and only
//! build with the `system-tests` feature enabled:
//!
//! ```text
//! cargo test -p system-tests --features system-tests
//! ```
//!
//! The registry is discovered through `SCHEMACACHE_SYSTEM_REGISTRY_URL`; when
//! the variable is unset, a throwaway registry container is started instead,
//! which requires a working Docker daemon.
