// dynakind-core/src/runtime/mapper.rs
// ============================================================================
// Module: REST-Mapping Overlay
// Description: Mapping resolver overlay for one schema-free kind.
// Purpose: Substitute a bound dynamic codec into the canonical mapping.
// Dependencies: crate::core, crate::interfaces, crate::runtime::codec
// ============================================================================

//! ## Overview
//! The overlay wraps a generic mapping resolver and intercepts exactly one
//! operation: resolving the synthetic resource type. The canonical mapping
//! is fetched from the wrapped resolver and returned with its codec replaced
//! by a [`DynamicResourceCodec`] bound to this overlay's kind. Every other
//! resolver operation passes straight through.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::ApiVersion;
use crate::core::DYNAMIC_RESOURCE_KIND;
use crate::core::KindBinding;
use crate::interfaces::MappingError;
use crate::interfaces::RestMapper;
use crate::interfaces::RestMapping;
use crate::runtime::codec::DynamicResourceCodec;

// ============================================================================
// SECTION: Mapping Overlay
// ============================================================================

/// Mapping resolver overlay bound to one schema-free kind.
///
/// Immutable after construction. Each registered kind owns its own overlay
/// instance; overlays share no state.
#[derive(Clone)]
pub struct DynamicResourceMapper {
    /// Wrapped generic resolver.
    inner: Arc<dyn RestMapper + Send + Sync>,
    /// Binding this overlay resolves.
    binding: KindBinding,
    /// Version under which the canonical mapping is registered.
    canonical_version: ApiVersion,
}

impl DynamicResourceMapper {
    /// Creates an overlay over a generic resolver for one binding.
    #[must_use]
    pub fn new(
        inner: Arc<dyn RestMapper + Send + Sync>,
        binding: KindBinding,
        canonical_version: impl Into<ApiVersion>,
    ) -> Self {
        Self {
            inner,
            binding,
            canonical_version: canonical_version.into(),
        }
    }

    /// Returns the binding this overlay serves.
    #[must_use]
    pub const fn binding(&self) -> &KindBinding {
        &self.binding
    }
}

impl RestMapper for DynamicResourceMapper {
    fn rest_mapping(&self, kind: &str, versions: &[&str]) -> Result<RestMapping, MappingError> {
        if versions.len() != 1 {
            return Err(MappingError::AmbiguousVersionSet(
                versions.iter().map(ToString::to_string).collect(),
            ));
        }
        if versions[0] != self.binding.version().as_str() {
            return Err(MappingError::UnsupportedVersion {
                requested: versions[0].to_string(),
                expected: self.binding.version().to_string(),
            });
        }
        if kind != DYNAMIC_RESOURCE_KIND {
            return Err(MappingError::UnsupportedKind {
                requested: kind.to_string(),
                expected: DYNAMIC_RESOURCE_KIND.to_string(),
            });
        }
        let mut mapping = self
            .inner
            .rest_mapping(DYNAMIC_RESOURCE_KIND, &[self.canonical_version.as_str()])?;
        mapping.codec = Arc::new(DynamicResourceCodec::new(
            mapping.codec,
            self.binding.clone(),
        ));
        Ok(mapping)
    }

    fn group_for_resource(&self, resource: &str) -> Result<String, MappingError> {
        self.inner.group_for_resource(resource)
    }

    fn aliases_for_resource(&self, resource: &str) -> Option<Vec<String>> {
        self.inner.aliases_for_resource(resource)
    }

    fn resource_singularizer(&self, resource: &str) -> Result<String, MappingError> {
        self.inner.resource_singularizer(resource)
    }

    fn version_and_kind_for_resource(
        &self,
        resource: &str,
    ) -> Result<(String, String), MappingError> {
        self.inner.version_and_kind_for_resource(resource)
    }
}
