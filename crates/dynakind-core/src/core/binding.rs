// dynakind-core/src/core/binding.rs
// ============================================================================
// Module: Kind Binding
// Description: Immutable registration-time configuration for one schema-free kind.
// Purpose: Carry the (kind, version) pair every bridge component closes over.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A [`KindBinding`] is fixed when an operator registers a schema-free
//! resource type and never changes for the lifetime of the components built
//! from it. A deployment serving N schema-free types runs N independent
//! bindings that share no mutable state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ApiVersion;
use crate::core::identifiers::KindName;

// ============================================================================
// SECTION: Synthetic Kind Literals
// ============================================================================

/// Framework-level type name under which every schema-free resource travels.
pub const DYNAMIC_RESOURCE_KIND: &str = "DynamicResource";

/// Framework-level type name for the list form of schema-free resources.
pub const DYNAMIC_RESOURCE_LIST_KIND: &str = "DynamicResourceList";

// ============================================================================
// SECTION: Kind Binding
// ============================================================================

/// Registration-time configuration for one schema-free resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindBinding {
    /// Operator-chosen kind name payloads must declare.
    kind: KindName,
    /// Single API version this binding serves.
    version: ApiVersion,
}

impl KindBinding {
    /// Creates a new binding for one kind/version pair.
    #[must_use]
    pub fn new(kind: impl Into<KindName>, version: impl Into<ApiVersion>) -> Self {
        Self {
            kind: kind.into(),
            version: version.into(),
        }
    }

    /// Returns the registered kind name.
    #[must_use]
    pub const fn kind(&self) -> &KindName {
        &self.kind
    }

    /// Returns the API version this binding serves.
    #[must_use]
    pub const fn version(&self) -> &ApiVersion {
        &self.version
    }

    /// Returns the list kind name, the registered kind with `List` appended.
    #[must_use]
    pub fn list_kind(&self) -> String {
        format!("{}List", self.kind)
    }
}
