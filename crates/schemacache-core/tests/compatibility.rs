// crates/schemacache-core/tests/compatibility.rs
// ============================================================================
// Module: Compatibility Level Tests
// Description: Wire-string round trips for the closed compatibility set.
// ============================================================================

//! ## Overview
//! Verifies every compatibility level round-trips through its registry wire
//! string (both `FromStr` and serde) and that strings outside the closed set
//! are rejected rather than smuggled in as a sentinel.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::str::FromStr;

use schemacache_core::CompatibilityLevel;

/// Every level paired with its registry wire string.
const LEVELS: [(CompatibilityLevel, &str); 7] = [
    (CompatibilityLevel::Backward, "BACKWARD"),
    (CompatibilityLevel::BackwardTransitive, "BACKWARD_TRANSITIVE"),
    (CompatibilityLevel::Forward, "FORWARD"),
    (CompatibilityLevel::ForwardTransitive, "FORWARD_TRANSITIVE"),
    (CompatibilityLevel::Full, "FULL"),
    (CompatibilityLevel::FullTransitive, "FULL_TRANSITIVE"),
    (CompatibilityLevel::None, "NONE"),
];

#[test]
fn every_level_round_trips_through_its_wire_string() {
    for (level, wire) in LEVELS {
        assert_eq!(level.as_str(), wire);
        assert_eq!(level.to_string(), wire);
        assert_eq!(CompatibilityLevel::from_str(wire).unwrap(), level);
    }
}

#[test]
fn every_level_round_trips_through_serde() {
    for (level, wire) in LEVELS {
        let encoded = serde_json::to_string(&level).unwrap();
        assert_eq!(encoded, format!("\"{wire}\""));
        let decoded: CompatibilityLevel = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, level);
    }
}

#[test]
fn unknown_wire_strings_are_rejected() {
    for input in ["", "backward", "SIDEWAYS", "NONE "] {
        let err = CompatibilityLevel::from_str(input).unwrap_err();
        assert_eq!(err.value, input);
    }
}
