// crates/schemacache-core/src/schema.rs
// ============================================================================
// Module: Schema Model
// Description: Immutable parsed schema with canonical text and content fingerprint.
// Purpose: Provide the value types the caches key and store.
// Dependencies: apache-avro, serde, sha2
// ============================================================================

//! ## Overview
//! A [`Schema`] wraps a parsed Avro schema together with its Parsing
//! Canonical Form text and the SHA-256 fingerprint of that text, both
//! computed once at parse time. Two schemas with identical canonical
//! structure always fingerprint identically regardless of whitespace or
//! attribute ordering in the source text, which makes [`SchemaFingerprint`]
//! a stable cache key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

use crate::error::SchemaParseError;

// ============================================================================
// SECTION: Fingerprint
// ============================================================================

/// Fingerprint width in bytes (SHA-256).
pub const FINGERPRINT_LEN: usize = 32;

/// Content fingerprint of a schema's canonical form.
///
/// # Invariants
/// - Value semantics: equal canonical structures produce equal fingerprints.
/// - Displays as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaFingerprint([u8; FINGERPRINT_LEN]);

impl SchemaFingerprint {
    /// Computes the fingerprint of canonical schema text.
    #[must_use]
    pub fn of(canonical_text: &str) -> Self {
        Self(Sha256::digest(canonical_text.as_bytes()).into())
    }

    /// Returns the fingerprint bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }
}

impl fmt::Display for SchemaFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Schema
// ============================================================================

/// Immutable parsed schema definition.
///
/// # Invariants
/// - Canonical text and fingerprint are computed once at parse time and never
///   change; callers may retain clones indefinitely.
/// - Equality is canonical-structure equality, not source-text equality.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Parsed Avro schema.
    parsed: apache_avro::Schema,
    /// Parsing Canonical Form of the schema.
    canonical: String,
    /// SHA-256 fingerprint of the canonical form.
    fingerprint: SchemaFingerprint,
}

impl Schema {
    /// Parses schema text into an immutable schema value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaParseError`] when the text is not a valid schema.
    pub fn parse(text: &str) -> Result<Self, SchemaParseError> {
        let parsed = apache_avro::Schema::parse_str(text).map_err(|err| SchemaParseError {
            message: err.to_string(),
        })?;
        let canonical = parsed.canonical_form();
        let fingerprint = SchemaFingerprint::of(&canonical);
        Ok(Self {
            parsed,
            canonical,
            fingerprint,
        })
    }

    /// Returns the stable textual serialization (Parsing Canonical Form).
    #[must_use]
    pub fn canonical_text(&self) -> &str {
        &self.canonical
    }

    /// Returns the content fingerprint used as the id-cache key.
    #[must_use]
    pub const fn fingerprint(&self) -> SchemaFingerprint {
        self.fingerprint
    }

    /// Returns the underlying parsed Avro schema.
    #[must_use]
    pub const fn as_avro(&self) -> &apache_avro::Schema {
        &self.parsed
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Schema {}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
