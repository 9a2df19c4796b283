// crates/schemacache-core/tests/proptest_schema.rs
// ============================================================================
// Module: Schema Property Tests
// Description: Property-based checks for fingerprinting and id validity.
// ============================================================================

//! ## Overview
//! Generates record schemas and raw id values to check that fingerprinting is
//! stable under textual variation and that id construction accepts exactly
//! the positive 32-bit range.

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

use proptest::collection::btree_set;
use proptest::prelude::*;

use schemacache_core::Schema;
use schemacache_core::SchemaId;

/// Strategy producing a non-empty set of distinct Avro field names.
fn field_names() -> impl Strategy<Value = std::collections::BTreeSet<String>> {
    btree_set("[a-z][a-z0-9_]{0,9}", 1..6)
}

/// Renders a compact record schema over the given field names.
fn compact_record(names: &std::collections::BTreeSet<String>) -> String {
    let fields: Vec<String> = names
        .iter()
        .map(|name| format!(r#"{{"name":"{name}","type":"string"}}"#))
        .collect();
    format!(
        r#"{{"type":"record","name":"generated","fields":[{}]}}"#,
        fields.join(",")
    )
}

/// Renders the same record with reordered attributes and extra whitespace.
fn noisy_record(names: &std::collections::BTreeSet<String>) -> String {
    let fields: Vec<String> = names
        .iter()
        .map(|name| format!(r#"  {{ "type": "string", "doc": "generated", "name": "{name}" }}"#))
        .collect();
    format!(
        "{{\n  \"fields\": [\n{}\n  ],\n  \"name\": \"generated\",\n  \"type\": \"record\"\n}}",
        fields.join(",\n")
    )
}

proptest! {
    /// Textual variation never changes the fingerprint of a record schema.
    #[test]
    fn textual_variation_preserves_the_fingerprint(names in field_names()) {
        let compact = Schema::parse(&compact_record(&names)).unwrap();
        let noisy = Schema::parse(&noisy_record(&names)).unwrap();

        prop_assert_eq!(compact.fingerprint(), noisy.fingerprint());
        prop_assert_eq!(compact.canonical_text(), noisy.canonical_text());
    }

    /// Canonical text always reparses to an equal schema.
    #[test]
    fn canonical_text_is_a_fixed_point(names in field_names()) {
        let schema = Schema::parse(&compact_record(&names)).unwrap();
        let reparsed = Schema::parse(schema.canonical_text()).unwrap();

        prop_assert_eq!(schema.fingerprint(), reparsed.fingerprint());
    }

    /// Raw ids construct exactly when they fall in the positive 32-bit range.
    #[test]
    fn raw_ids_construct_only_in_the_positive_range(raw in proptest::num::i64::ANY) {
        let constructed = SchemaId::from_raw(raw);
        let valid = raw >= 1 && raw <= i64::from(u32::MAX);

        prop_assert_eq!(constructed.is_some(), valid);
        if let Some(id) = constructed {
            prop_assert_eq!(i64::from(id.get()), raw);
        }
    }
}
