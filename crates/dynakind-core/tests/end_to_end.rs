// dynakind-core/tests/end_to_end.rs
// ============================================================================
// Module: End-to-End Bridge Tests
// Description: Full resolve/allocate/decode/encode flow for one binding.
// Purpose: Exercise the adapter triplet the way the REST registry would.
// Dependencies: dynakind-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::sync::Arc;

use dynakind_core::ApiVersion;
use dynakind_core::BridgeObject;
use dynakind_core::DYNAMIC_RESOURCE_KIND;
use dynakind_core::DYNAMIC_RESOURCE_LIST_KIND;
use dynakind_core::DynamicResourceCreator;
use dynakind_core::DynamicResourceMapper;
use dynakind_core::InMemoryRestMapper;
use dynakind_core::KindBinding;
use dynakind_core::MapperRegistration;
use dynakind_core::ObjectCreator;
use dynakind_core::RestMapper;
use dynakind_core::RestScope;
use dynakind_core::TypedJsonCodec;
use dynakind_core::TypedObjectCreator;

/// Installs the canonical mapping and builds the triplet for one binding,
/// mirroring what a registry does when an operator registers a new kind.
fn bridge_for(kind: &str, version: &str) -> (DynamicResourceMapper, DynamicResourceCreator) {
    let canonical = InMemoryRestMapper::new();
    canonical
        .register(MapperRegistration {
            kind: DYNAMIC_RESOURCE_KIND.to_string(),
            group: "bridge.example.com".to_string(),
            resource: "dynamicresources".to_string(),
            singular: "dynamicresource".to_string(),
            aliases: Vec::new(),
            version: ApiVersion::new("v1"),
            scope: RestScope::Namespaced,
            codec: Arc::new(TypedJsonCodec::new("v1")),
        })
        .unwrap();
    let binding = KindBinding::new(kind, version);
    let mapper = DynamicResourceMapper::new(Arc::new(canonical), binding.clone(), "v1");
    let fallback = TypedObjectCreator::new("v1", vec!["Widget".to_string()]);
    let creator = DynamicResourceCreator::new(binding, "v1", Arc::new(fallback));
    (mapper, creator)
}

#[test]
fn registry_flow_decodes_and_re_encodes_one_resource() {
    let (mapper, creator) = bridge_for("Foo", "v1alpha1");

    // Resolve the mapping, allocate a target, decode, re-encode.
    let mapping = mapper.rest_mapping(DYNAMIC_RESOURCE_KIND, &["v1alpha1"]).unwrap();
    let mut target = creator.create("v1alpha1", DYNAMIC_RESOURCE_KIND).unwrap();

    let input = br#"{"kind":"Foo","metadata":{"name":"bar","labels":{"x":"y"}}}"#;
    mapping.codec.decode_into(input, &mut target).unwrap();

    let resource = target.as_resource().unwrap();
    assert_eq!(resource.name, "bar");
    assert_eq!(resource.labels.get("x").map(String::as_str), Some("y"));
    assert_eq!(resource.raw_body, input);

    let output = mapping.codec.encode(&target).unwrap();
    assert_eq!(output, input);
}

#[test]
fn registry_flow_lists_stored_resources() {
    let (mapper, creator) = bridge_for("Foo", "v1alpha1");
    let mapping = mapper.rest_mapping(DYNAMIC_RESOURCE_KIND, &["v1alpha1"]).unwrap();

    let stored = [
        br#"{"kind":"Foo","metadata":{"name":"foo"}}"#.as_slice(),
        br#"{"kind":"Foo","metadata":{"name":"bar"}}"#.as_slice(),
    ];
    let mut items = Vec::new();
    for body in stored {
        match mapping.codec.decode(body).unwrap() {
            BridgeObject::Resource(resource) => items.push(resource),
            other => panic!("expected resource, got {other:?}"),
        }
    }
    assert_eq!(items[0].name, "foo");
    assert_eq!(items[1].name, "bar");

    let mut list = creator
        .create("v1alpha1", DYNAMIC_RESOURCE_LIST_KIND)
        .unwrap();
    match &mut list {
        BridgeObject::List(contents) => {
            contents.items = items;
            contents.resource_version = Some("1".to_string());
        }
        other => panic!("expected list, got {other:?}"),
    }
    let encoded = mapping.codec.encode(&list).unwrap();
    let expected = [
        br#"{"kind": "FooList", "items": [ "#.as_slice(),
        stored[0],
        b",",
        stored[1],
        br#" ]}"#.as_slice(),
    ]
    .concat();
    assert_eq!(encoded, expected);
}

#[test]
fn two_bindings_serve_their_own_kinds_end_to_end() {
    let (foo_mapper, _) = bridge_for("Foo", "v1alpha1");
    let (bar_mapper, bar_creator) = bridge_for("Bar", "v1");

    let foo_mapping = foo_mapper.rest_mapping(DYNAMIC_RESOURCE_KIND, &["v1alpha1"]).unwrap();
    let bar_mapping = bar_mapper.rest_mapping(DYNAMIC_RESOURCE_KIND, &["v1"]).unwrap();

    let bar_input = br#"{"kind":"Bar","metadata":{"name":"b"}}"#;
    assert!(foo_mapping.codec.decode(bar_input).is_err());

    let mut target = bar_creator.create("v1", DYNAMIC_RESOURCE_KIND).unwrap();
    bar_mapping.codec.decode_into(bar_input, &mut target).unwrap();
    assert_eq!(bar_mapping.codec.encode(&target).unwrap(), bar_input);

    let list_target = bar_creator.create("v1", DYNAMIC_RESOURCE_LIST_KIND).unwrap();
    assert!(list_target.as_list().unwrap().items.is_empty());
}
