// dynakind-core/tests/object_creator.rs
// ============================================================================
// Module: Object Factory Tests
// Description: Allocation of synthetic kinds and fallback delegation.
// Purpose: Ensure the factory validates versions and routes unrelated kinds.
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

use dynakind_core::BridgeObject;
use dynakind_core::DYNAMIC_RESOURCE_KIND;
use dynakind_core::DYNAMIC_RESOURCE_LIST_KIND;
use dynakind_core::DynamicResourceCreator;
use dynakind_core::FactoryError;
use dynakind_core::KindBinding;
use dynakind_core::ObjectCreator;
use dynakind_core::TypedObjectCreator;

fn foo_creator() -> DynamicResourceCreator {
    let fallback = TypedObjectCreator::new("v1", vec!["Widget".to_string()]);
    DynamicResourceCreator::new(
        KindBinding::new("Foo", "v1alpha1"),
        "v1",
        Arc::new(fallback),
    )
}

#[test]
fn creates_empty_envelope_for_synthetic_kind() {
    let creator = foo_creator();
    let object = creator.create("v1alpha1", DYNAMIC_RESOURCE_KIND).unwrap();
    let resource = object.as_resource().unwrap();
    assert!(resource.name.is_empty());
    assert!(resource.raw_body.is_empty());
}

#[test]
fn creates_empty_list_for_synthetic_list_kind() {
    let creator = foo_creator();
    let object = creator.create("v1alpha1", DYNAMIC_RESOURCE_LIST_KIND).unwrap();
    let list = object.as_list().unwrap();
    assert!(list.items.is_empty());
    assert!(list.resource_version.is_none());
}

#[test]
fn delegates_unrelated_kinds_to_fallback_at_canonical_version() {
    let creator = foo_creator();
    let object = creator.create("v1alpha1", "Widget").unwrap();
    match object {
        BridgeObject::Foreign(foreign) => {
            assert_eq!(foreign.kind.as_str(), "Widget");
            assert_eq!(foreign.api_version.as_str(), "v1");
        }
        other => panic!("expected foreign object, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_version_regardless_of_kind() {
    let creator = foo_creator();
    let err = creator.create("v2", DYNAMIC_RESOURCE_KIND).unwrap_err();
    assert!(matches!(err, FactoryError::UnsupportedVersion { .. }));
    let err = creator.create("v2", "Widget").unwrap_err();
    assert!(matches!(err, FactoryError::UnsupportedVersion { .. }));
}

#[test]
fn fallback_reports_unknown_kinds() {
    let creator = foo_creator();
    let err = creator.create("v1alpha1", "Gadget").unwrap_err();
    assert!(matches!(err, FactoryError::UnknownKind(_)));
}

#[test]
fn fallback_validates_its_own_version() {
    let fallback = TypedObjectCreator::new("v1", vec!["Widget".to_string()]);
    let err = fallback.create("v2", "Widget").unwrap_err();
    assert!(matches!(err, FactoryError::UnsupportedVersion { .. }));
}
