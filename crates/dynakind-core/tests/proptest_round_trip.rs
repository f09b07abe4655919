// dynakind-core/tests/proptest_round_trip.rs
// ============================================================================
// Module: Round-Trip Property Tests
// Description: Property tests for decode/encode byte fidelity.
// Purpose: Verify Encode(Decode(b)) == b over generated valid payloads.
// ============================================================================

//! Property-based tests for the byte-fidelity round-trip law.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::sync::Arc;

use dynakind_core::DynamicResourceCodec;
use dynakind_core::KindBinding;
use dynakind_core::ResourceCodec;
use dynakind_core::TypedJsonCodec;
use proptest::prelude::*;
use serde_json::Value;
use serde_json::json;

fn foo_codec() -> DynamicResourceCodec {
    DynamicResourceCodec::new(
        Arc::new(TypedJsonCodec::new("v1")),
        KindBinding::new("Foo", "v1alpha1"),
    )
}

fn label_map_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9_-]{0,12}"), 0..4)
}

fn extra_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        "[a-z ]{0,16}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn decode_then_encode_is_byte_identical(
        name in "[a-z][a-z0-9-]{0,20}",
        namespace in prop::option::of("[a-z]{1,10}"),
        resource_version in prop::option::of("[0-9]{1,9}"),
        labels in label_map_strategy(),
        extra in extra_value_strategy(),
    ) {
        let mut metadata = serde_json::Map::new();
        metadata.insert("name".to_string(), json!(name));
        if let Some(namespace) = namespace {
            metadata.insert("namespace".to_string(), json!(namespace));
        }
        if let Some(resource_version) = resource_version {
            metadata.insert("resourceVersion".to_string(), json!(resource_version));
        }
        if !labels.is_empty() {
            let map: serde_json::Map<String, Value> = labels
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            metadata.insert("labels".to_string(), Value::Object(map));
        }
        let payload = json!({
            "kind": "Foo",
            "metadata": Value::Object(metadata),
            "spec": extra,
        });
        let bytes = serde_json::to_vec(&payload).unwrap();

        let codec = foo_codec();
        let decoded = codec.decode(&bytes).unwrap();
        let encoded = codec.encode(&decoded).unwrap();
        prop_assert_eq!(encoded, bytes);
    }

    #[test]
    fn decode_failures_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let codec = foo_codec();
        let _ = codec.decode(&bytes);
    }
}
