// dynakind-core/src/interfaces/mod.rs
// ============================================================================
// Module: Dynakind Interfaces
// Description: Contracts between the bridge and the surrounding REST machinery.
// Purpose: Define codec, mapping, and factory surfaces plus their error sets.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The bridge collaborates with a generic REST registry through three
//! contracts: a typed codec every resource kind must satisfy, a mapping
//! resolver that associates kinds with storage paths and codecs, and an
//! object factory that allocates decode targets. The storage engine behind
//! the registry is out of scope; it is reached only through these surfaces.
//! All failures are synchronous, local to the single call in progress, and
//! never retried at this layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::core::ApiVersion;
use crate::core::BridgeObject;

// ============================================================================
// SECTION: Codec Contract
// ============================================================================

/// Errors raised by resource codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload is not parseable as a JSON document of the expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// Top-level `kind` field is absent or not a string.
    #[error("missing or non-string kind field")]
    MissingKind,
    /// Top-level `kind` field does not match the binding.
    #[error("kind mismatch: got {found}, expected {expected}")]
    KindMismatch {
        /// Kind the binding is registered for.
        expected: String,
        /// Kind declared by the payload.
        found: String,
    },
    /// Top-level `metadata` field is absent or not an object.
    #[error("missing metadata object")]
    MissingMetadata,
    /// `metadata.name` is absent or not a string.
    #[error("missing or non-string metadata.name")]
    MissingName,
    /// `metadata.resourceVersion` is present but not a string.
    #[error("metadata.resourceVersion is not a string")]
    InvalidResourceVersion,
    /// A label value is not a string.
    #[error("label {key} has a non-string value")]
    InvalidLabelValue {
        /// Key of the offending label.
        key: String,
    },
    /// Decode target is not an envelope object.
    #[error("decode target is not a dynamic resource")]
    TypeMismatch,
    /// Requested kind is not the synthetic resource type name.
    #[error("unexpected kind: got {found}, expected {expected}")]
    UnexpectedKind {
        /// Synthetic type name the codec serves.
        expected: String,
        /// Kind requested by the caller.
        found: String,
    },
    /// Payload declares a kind that conflicts with the binding.
    #[error("kind conflict: payload declares {found}, binding expects {expected}")]
    KindConflict {
        /// Kind the binding is registered for.
        expected: String,
        /// Kind declared by the payload.
        found: String,
    },
    /// Payload declares an apiVersion that conflicts with the requested one.
    #[error("apiVersion conflict: payload declares {found}, expected {expected}")]
    VersionConflict {
        /// Version requested by the caller.
        expected: String,
        /// Version declared by the payload.
        found: String,
    },
    /// Object shape is outside the set this codec encodes.
    #[error("unsupported object type for encoding")]
    UnsupportedType,
    /// Delegate codec cannot produce the requested target version.
    #[error("unsupported target version {0}")]
    UnsupportedTargetVersion(String),
    /// Object could not be serialized to bytes.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Typed codec contract every resource kind satisfies.
///
/// The general-purpose delegate codec implements this same contract; the
/// dynamic codec wraps one and forwards the shapes it does not own.
pub trait ResourceCodec {
    /// Decodes payload bytes into a freshly allocated object.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when the payload is malformed or fails the
    /// envelope validation rules.
    fn decode(&self, data: &[u8]) -> Result<BridgeObject, CodecError>;

    /// Decodes payload bytes into an existing target object.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TypeMismatch`] when the target is not an
    /// envelope, or any decode failure.
    fn decode_into(&self, data: &[u8], target: &mut BridgeObject) -> Result<(), CodecError>;

    /// Decodes payload bytes into a target, defaulting absent `kind` and
    /// `apiVersion` entries against the supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] on shape, conflict, or validation failures.
    fn decode_into_with_version_kind(
        &self,
        data: &[u8],
        target: &mut BridgeObject,
        version: &str,
        kind: &str,
    ) -> Result<(), CodecError>;

    /// Decodes payload bytes into a representation of the requested version.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when decode fails or the delegate cannot
    /// produce the requested version.
    fn decode_to_version(&self, data: &[u8], version: &str) -> Result<BridgeObject, CodecError>;

    /// Encodes an object to payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedType`] for shapes outside the
    /// codec's closed set, or any delegate failure.
    fn encode(&self, object: &BridgeObject) -> Result<Vec<u8>, CodecError>;
}

// ============================================================================
// SECTION: Mapping Contract
// ============================================================================

/// Errors raised by mapping resolvers.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Resolution requires exactly one requested version.
    #[error("ambiguous version set: {0:?}")]
    AmbiguousVersionSet(Vec<String>),
    /// Requested version is not served by the binding.
    #[error("unsupported version {requested}, expected {expected}")]
    UnsupportedVersion {
        /// Version requested by the caller.
        requested: String,
        /// Version the binding serves.
        expected: String,
    },
    /// Requested kind is not the synthetic resource type name.
    #[error("unsupported kind {requested}, expected {expected}")]
    UnsupportedKind {
        /// Kind requested by the caller.
        requested: String,
        /// Kind the resolver serves.
        expected: String,
    },
    /// No mapping is registered for the requested kind.
    #[error("no mapping registered for kind {0}")]
    UnknownKind(String),
    /// No mapping is registered for the requested resource path.
    #[error("no mapping registered for resource {0}")]
    UnknownResource(String),
    /// A mapping for the kind is already registered.
    #[error("mapping conflict: kind {0} already registered")]
    AlreadyRegistered(String),
    /// Resolver internal failure.
    #[error("resolver error: {0}")]
    Resolver(String),
}

/// REST scope of a mapped resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestScope {
    /// Resource lives at the API root.
    Root,
    /// Resource lives inside a namespace.
    Namespaced,
}

/// Association between a resource type, its storage path, and its codec.
#[derive(Clone)]
pub struct RestMapping {
    /// Resource path segment (plural form).
    pub resource: String,
    /// API version the mapping serves.
    pub api_version: ApiVersion,
    /// REST scope of the resource.
    pub scope: RestScope,
    /// Codec used to decode and encode objects of this type.
    pub codec: Arc<dyn ResourceCodec + Send + Sync>,
}

impl fmt::Debug for RestMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The codec is a trait object with no Debug bound.
        f.debug_struct("RestMapping")
            .field("resource", &self.resource)
            .field("api_version", &self.api_version)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Generic mapping resolver consumed by the REST registry.
pub trait RestMapper {
    /// Resolves the mapping for a kind at the requested versions.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError`] when the kind or version set cannot be
    /// resolved.
    fn rest_mapping(&self, kind: &str, versions: &[&str]) -> Result<RestMapping, MappingError>;

    /// Returns the API group owning a resource path.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UnknownResource`] when the resource is not
    /// registered.
    fn group_for_resource(&self, resource: &str) -> Result<String, MappingError>;

    /// Returns the alias expansion for a resource shorthand, if any.
    fn aliases_for_resource(&self, resource: &str) -> Option<Vec<String>>;

    /// Returns the singular form of a resource path segment.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UnknownResource`] when the resource is not
    /// registered.
    fn resource_singularizer(&self, resource: &str) -> Result<String, MappingError>;

    /// Returns the default version and kind for a resource path.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UnknownResource`] when the resource is not
    /// registered.
    fn version_and_kind_for_resource(
        &self,
        resource: &str,
    ) -> Result<(String, String), MappingError>;
}

// ============================================================================
// SECTION: Factory Contract
// ============================================================================

/// Errors raised by object factories.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// Requested version is not served by the factory.
    #[error("unsupported version {requested} for kind {kind}")]
    UnsupportedVersion {
        /// Version requested by the caller.
        requested: String,
        /// Kind the allocation was requested for.
        kind: String,
    },
    /// No constructor is registered for the requested kind.
    #[error("no constructor registered for kind {0}")]
    UnknownKind(String),
}

/// Object factory consumed by the REST registry to allocate decode targets.
pub trait ObjectCreator {
    /// Allocates an empty object for the requested version and kind.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] when the version or kind is not served.
    fn create(&self, version: &str, kind: &str) -> Result<BridgeObject, FactoryError>;
}
