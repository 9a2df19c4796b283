// crates/schemacache-core/src/compatibility.rs
// ============================================================================
// Module: Compatibility Levels
// Description: Closed set of registry compatibility policies for a subject.
// Purpose: Give the registry's evolution policies a typed, serializable form.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A compatibility level constrains how a subject's schema may evolve across
//! versions. The set is closed and registry-defined; the wire form is the
//! SCREAMING_SNAKE_CASE string the registry speaks. An unknown string is an
//! error, never a sentinel member of the enum.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Compatibility Level
// ============================================================================

/// Registry-enforced compatibility policy for a subject.
///
/// # Invariants
/// - Serializes to exactly the registry's wire string (for example
///   `BACKWARD_TRANSITIVE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompatibilityLevel {
    /// New schema can read data written by the previous schema.
    Backward,
    /// New schema can read data written by all previous schemas.
    BackwardTransitive,
    /// Previous schema can read data written by the new schema.
    Forward,
    /// All previous schemas can read data written by the new schema.
    ForwardTransitive,
    /// Both backward and forward compatible with the previous schema.
    Full,
    /// Both backward and forward compatible with all previous schemas.
    FullTransitive,
    /// No compatibility checking is performed.
    None,
}

impl CompatibilityLevel {
    /// Returns the registry wire string for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backward => "BACKWARD",
            Self::BackwardTransitive => "BACKWARD_TRANSITIVE",
            Self::Forward => "FORWARD",
            Self::ForwardTransitive => "FORWARD_TRANSITIVE",
            Self::Full => "FULL",
            Self::FullTransitive => "FULL_TRANSITIVE",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompatibilityLevel {
    type Err = UnknownCompatibilityLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BACKWARD" => Ok(Self::Backward),
            "BACKWARD_TRANSITIVE" => Ok(Self::BackwardTransitive),
            "FORWARD" => Ok(Self::Forward),
            "FORWARD_TRANSITIVE" => Ok(Self::ForwardTransitive),
            "FULL" => Ok(Self::Full),
            "FULL_TRANSITIVE" => Ok(Self::FullTransitive),
            "NONE" => Ok(Self::None),
            other => Err(UnknownCompatibilityLevel {
                value: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// A compatibility string outside the registry's closed set.
///
/// # Invariants
/// - `value` is the rejected input, verbatim.
#[derive(Debug, Error)]
#[error("unknown compatibility level: {value}")]
pub struct UnknownCompatibilityLevel {
    /// The rejected input string.
    pub value: String,
}
