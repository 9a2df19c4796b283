// crates/schemacache-core/src/identifiers.rs
// ============================================================================
// Module: Schema Identifiers
// Description: Registry-assigned schema identifier with a positive-only invariant.
// Purpose: Make non-positive ids unrepresentable past the transport boundary.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The registry assigns every distinct schema a positive integer id. The
//! validity predicate (strictly greater than zero) is enforced here, at the
//! construction boundary: [`SchemaId::from_raw`] rejects anything the
//! registry is not allowed to hand out, so an invalid id can never be cached
//! or returned to a caller as success.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroU32;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Schema Id
// ============================================================================

/// Registry-assigned schema identifier.
///
/// # Invariants
/// - Always >= 1; the registry's "invalid / not yet assigned" sentinel values
///   (zero and negatives) cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaId(NonZeroU32);

impl SchemaId {
    /// Creates a new schema identifier from a non-zero value.
    #[must_use]
    pub const fn new(id: NonZeroU32) -> Self {
        Self(id)
    }

    /// Creates a schema identifier from a raw wire value.
    ///
    /// Returns `None` for any value outside `1..=u32::MAX`, which covers the
    /// registry contract violations a transport must reject.
    #[must_use]
    pub fn from_raw(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().and_then(NonZeroU32::new).map(Self)
    }

    /// Returns the raw identifier value (always >= 1).
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.get().fmt(f)
    }
}
