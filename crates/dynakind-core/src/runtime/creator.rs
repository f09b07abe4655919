// dynakind-core/src/runtime/creator.rs
// ============================================================================
// Module: Dynamic Object Factory
// Description: Allocates empty envelope objects for the synthetic kinds.
// Purpose: Satisfy the registry's object-construction contract for one binding.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The factory allocates empty envelopes for the synthetic resource type and
//! its list form. Any other kind is delegated to a fallback factory at a
//! fixed canonical version, so the binding interoperates with the typed
//! registry it does not own.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::ApiVersion;
use crate::core::BridgeObject;
use crate::core::DYNAMIC_RESOURCE_KIND;
use crate::core::DYNAMIC_RESOURCE_LIST_KIND;
use crate::core::KindBinding;
use crate::interfaces::FactoryError;
use crate::interfaces::ObjectCreator;

// ============================================================================
// SECTION: Dynamic Factory
// ============================================================================

/// Object factory bound to one schema-free kind.
#[derive(Clone)]
pub struct DynamicResourceCreator {
    /// Binding this factory serves.
    binding: KindBinding,
    /// Version under which the fallback factory allocates foreign kinds.
    canonical_version: ApiVersion,
    /// Fallback factory for kinds outside the binding.
    delegate: Arc<dyn ObjectCreator + Send + Sync>,
}

impl DynamicResourceCreator {
    /// Creates a factory for one binding with a typed-registry fallback.
    #[must_use]
    pub fn new(
        binding: KindBinding,
        canonical_version: impl Into<ApiVersion>,
        delegate: Arc<dyn ObjectCreator + Send + Sync>,
    ) -> Self {
        Self {
            binding,
            canonical_version: canonical_version.into(),
            delegate,
        }
    }

    /// Returns the binding this factory serves.
    #[must_use]
    pub const fn binding(&self) -> &KindBinding {
        &self.binding
    }
}

impl ObjectCreator for DynamicResourceCreator {
    fn create(&self, version: &str, kind: &str) -> Result<BridgeObject, FactoryError> {
        if version != self.binding.version().as_str() {
            return Err(FactoryError::UnsupportedVersion {
                requested: version.to_string(),
                kind: kind.to_string(),
            });
        }
        match kind {
            DYNAMIC_RESOURCE_KIND => Ok(BridgeObject::empty_resource()),
            DYNAMIC_RESOURCE_LIST_KIND => Ok(BridgeObject::empty_list()),
            _ => self.delegate.create(self.canonical_version.as_str(), kind),
        }
    }
}
