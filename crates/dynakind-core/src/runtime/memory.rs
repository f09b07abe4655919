// dynakind-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory Collaborators
// Description: Test-grade implementations of the collaborator contracts.
// Purpose: Provide deterministic mapper, codec, and factory stand-ins.
// Dependencies: crate::core, crate::interfaces, base64, serde, serde_json
// ============================================================================

//! ## Overview
//! This module provides simple in-memory implementations of the resolver,
//! delegate codec, and fallback factory contracts for tests and local demos.
//! They are not intended for production use; a real deployment supplies the
//! surrounding framework's own implementations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::ApiVersion;
use crate::core::BridgeObject;
use crate::core::DYNAMIC_RESOURCE_KIND;
use crate::core::DYNAMIC_RESOURCE_LIST_KIND;
use crate::core::DynamicResource;
use crate::core::DynamicResourceList;
use crate::core::ForeignObject;
use crate::core::KindName;
use crate::core::StatusDocument;
use crate::interfaces::CodecError;
use crate::interfaces::FactoryError;
use crate::interfaces::MappingError;
use crate::interfaces::ObjectCreator;
use crate::interfaces::ResourceCodec;
use crate::interfaces::RestMapper;
use crate::interfaces::RestMapping;
use crate::interfaces::RestScope;

// ============================================================================
// SECTION: In-Memory Mapper
// ============================================================================

/// Kind name under which status documents travel.
const STATUS_KIND: &str = "Status";

/// Canonical mapping registration for the in-memory resolver.
#[derive(Clone)]
pub struct MapperRegistration {
    /// Kind name the mapping serves.
    pub kind: String,
    /// API group owning the resource.
    pub group: String,
    /// Resource path segment (plural form).
    pub resource: String,
    /// Singular form of the resource path segment.
    pub singular: String,
    /// Shorthand aliases for the resource.
    pub aliases: Vec<String>,
    /// Version the mapping is registered under.
    pub version: ApiVersion,
    /// REST scope of the resource.
    pub scope: RestScope,
    /// Codec for objects of this type.
    pub codec: Arc<dyn ResourceCodec + Send + Sync>,
}

/// In-memory mapping resolver for tests and examples.
#[derive(Clone, Default)]
pub struct InMemoryRestMapper {
    /// Registered mappings keyed by kind, protected by a mutex.
    entries: Arc<Mutex<BTreeMap<String, MapperRegistration>>>,
}

impl InMemoryRestMapper {
    /// Creates an empty in-memory resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a canonical mapping for a kind.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::AlreadyRegistered`] when the kind already has
    /// a mapping.
    pub fn register(&self, registration: MapperRegistration) -> Result<(), MappingError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| MappingError::Resolver("rest mapper mutex poisoned".to_string()))?;
        if guard.contains_key(&registration.kind) {
            return Err(MappingError::AlreadyRegistered(registration.kind));
        }
        guard.insert(registration.kind.clone(), registration);
        Ok(())
    }

    /// Runs a closure over the registration matching a resource path.
    fn with_resource_entry<T>(
        &self,
        resource: &str,
        select: impl Fn(&MapperRegistration) -> T,
    ) -> Result<T, MappingError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| MappingError::Resolver("rest mapper mutex poisoned".to_string()))?;
        guard
            .values()
            .find(|entry| entry.resource == resource || entry.aliases.iter().any(|a| a == resource))
            .map(select)
            .ok_or_else(|| MappingError::UnknownResource(resource.to_string()))
    }
}

impl RestMapper for InMemoryRestMapper {
    fn rest_mapping(&self, kind: &str, versions: &[&str]) -> Result<RestMapping, MappingError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| MappingError::Resolver("rest mapper mutex poisoned".to_string()))?;
        let entry = guard
            .get(kind)
            .ok_or_else(|| MappingError::UnknownKind(kind.to_string()))?;
        match versions {
            [] => {}
            [single] => {
                if *single != entry.version.as_str() {
                    return Err(MappingError::UnsupportedVersion {
                        requested: (*single).to_string(),
                        expected: entry.version.to_string(),
                    });
                }
            }
            _ => {
                return Err(MappingError::AmbiguousVersionSet(
                    versions.iter().map(ToString::to_string).collect(),
                ));
            }
        }
        Ok(RestMapping {
            resource: entry.resource.clone(),
            api_version: entry.version.clone(),
            scope: entry.scope,
            codec: Arc::clone(&entry.codec),
        })
    }

    fn group_for_resource(&self, resource: &str) -> Result<String, MappingError> {
        self.with_resource_entry(resource, |entry| entry.group.clone())
    }

    fn aliases_for_resource(&self, resource: &str) -> Option<Vec<String>> {
        self.with_resource_entry(resource, |entry| entry.aliases.clone())
            .ok()
            .filter(|aliases| !aliases.is_empty())
    }

    fn resource_singularizer(&self, resource: &str) -> Result<String, MappingError> {
        self.with_resource_entry(resource, |entry| entry.singular.clone())
    }

    fn version_and_kind_for_resource(
        &self,
        resource: &str,
    ) -> Result<(String, String), MappingError> {
        self.with_resource_entry(resource, |entry| {
            (entry.version.to_string(), entry.kind.clone())
        })
    }
}

// ============================================================================
// SECTION: Typed Wire Documents
// ============================================================================

/// Typed metadata block of the structural wire form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TypedMetadata {
    /// Resource name.
    name: String,
    /// Optional container scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    /// Resource labels.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    labels: BTreeMap<String, String>,
    /// Optional concurrency token.
    #[serde(
        default,
        rename = "resourceVersion",
        skip_serializing_if = "Option::is_none"
    )]
    resource_version: Option<String>,
}

/// Structural wire form of one envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TypedResourceDoc {
    /// Synthetic type name.
    kind: String,
    /// Version the document was encoded for.
    #[serde(rename = "apiVersion")]
    api_version: String,
    /// Envelope metadata.
    #[serde(default)]
    metadata: TypedMetadata,
    /// Base64-encoded raw payload bytes.
    #[serde(default)]
    data: String,
}

/// Structural wire form of an envelope list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TypedListDoc {
    /// Synthetic list type name.
    kind: String,
    /// Version the document was encoded for.
    #[serde(rename = "apiVersion")]
    api_version: String,
    /// Optional list-level concurrency token.
    #[serde(
        default,
        rename = "resourceVersion",
        skip_serializing_if = "Option::is_none"
    )]
    resource_version: Option<String>,
    /// Item documents in list order.
    #[serde(default)]
    items: Vec<TypedResourceDoc>,
}

impl TypedResourceDoc {
    /// Builds the wire form of an envelope for a version.
    fn from_resource(resource: &DynamicResource, version: &ApiVersion) -> Self {
        Self {
            kind: DYNAMIC_RESOURCE_KIND.to_string(),
            api_version: version.to_string(),
            metadata: TypedMetadata {
                name: resource.name.clone(),
                namespace: resource.namespace.clone(),
                labels: resource.labels.clone(),
                resource_version: resource.resource_version.clone(),
            },
            data: STANDARD.encode(&resource.raw_body),
        }
    }

    /// Rebuilds an envelope from its wire form.
    fn into_resource(self) -> Result<DynamicResource, CodecError> {
        let raw_body = STANDARD
            .decode(self.data.as_bytes())
            .map_err(|err| CodecError::MalformedPayload(err.to_string()))?;
        Ok(DynamicResource {
            name: self.metadata.name,
            namespace: self.metadata.namespace,
            labels: self.metadata.labels,
            resource_version: self.metadata.resource_version,
            raw_body,
        })
    }
}

// ============================================================================
// SECTION: Typed JSON Codec
// ============================================================================

/// General-purpose structural codec for tests and examples.
///
/// Serves as the delegate behind the canonical mapping: it encodes objects
/// structurally through `serde_json` and serves exactly one version.
#[derive(Debug, Clone)]
pub struct TypedJsonCodec {
    /// Version this codec serves.
    version: ApiVersion,
}

impl TypedJsonCodec {
    /// Creates a codec serving one version.
    #[must_use]
    pub fn new(version: impl Into<ApiVersion>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Maps a serde_json failure into a serialization error.
    fn serialization_error(err: &serde_json::Error) -> CodecError {
        CodecError::Serialization(err.to_string())
    }
}

impl ResourceCodec for TypedJsonCodec {
    fn decode(&self, data: &[u8]) -> Result<BridgeObject, CodecError> {
        let value: Value = serde_json::from_slice(data)
            .map_err(|err| CodecError::MalformedPayload(err.to_string()))?;
        let Some(kind) = value.get("kind").and_then(Value::as_str) else {
            return Err(CodecError::MissingKind);
        };
        match kind {
            DYNAMIC_RESOURCE_KIND => {
                let doc: TypedResourceDoc = serde_json::from_value(value)
                    .map_err(|err| CodecError::MalformedPayload(err.to_string()))?;
                Ok(BridgeObject::Resource(doc.into_resource()?))
            }
            DYNAMIC_RESOURCE_LIST_KIND => {
                let doc: TypedListDoc = serde_json::from_value(value)
                    .map_err(|err| CodecError::MalformedPayload(err.to_string()))?;
                let mut items = Vec::with_capacity(doc.items.len());
                for item in doc.items {
                    items.push(item.into_resource()?);
                }
                Ok(BridgeObject::List(DynamicResourceList {
                    items,
                    resource_version: doc.resource_version,
                }))
            }
            STATUS_KIND => {
                let status: StatusDocument = serde_json::from_value(value)
                    .map_err(|err| CodecError::MalformedPayload(err.to_string()))?;
                Ok(BridgeObject::Status(status))
            }
            other => {
                let kind = KindName::new(other);
                let api_version = ApiVersion::new(
                    value
                        .get("apiVersion")
                        .and_then(Value::as_str)
                        .unwrap_or_default(),
                );
                Ok(BridgeObject::Foreign(ForeignObject {
                    api_version,
                    kind,
                    body: value,
                }))
            }
        }
    }

    fn decode_into(&self, data: &[u8], target: &mut BridgeObject) -> Result<(), CodecError> {
        let decoded = self.decode(data)?;
        match (decoded, target) {
            (BridgeObject::Resource(decoded), BridgeObject::Resource(target)) => {
                *target = decoded;
                Ok(())
            }
            (BridgeObject::List(decoded), BridgeObject::List(target)) => {
                *target = decoded;
                Ok(())
            }
            (BridgeObject::Status(decoded), BridgeObject::Status(target)) => {
                *target = decoded;
                Ok(())
            }
            (BridgeObject::Foreign(decoded), BridgeObject::Foreign(target)) => {
                *target = decoded;
                Ok(())
            }
            _ => Err(CodecError::TypeMismatch),
        }
    }

    fn decode_into_with_version_kind(
        &self,
        data: &[u8],
        target: &mut BridgeObject,
        version: &str,
        kind: &str,
    ) -> Result<(), CodecError> {
        if version != self.version.as_str() {
            return Err(CodecError::UnsupportedTargetVersion(version.to_string()));
        }
        let decoded = self.decode(data)?;
        let decoded_kind = match &decoded {
            BridgeObject::Resource(_) => DYNAMIC_RESOURCE_KIND,
            BridgeObject::List(_) => DYNAMIC_RESOURCE_LIST_KIND,
            BridgeObject::Status(_) => STATUS_KIND,
            BridgeObject::Foreign(foreign) => foreign.kind.as_str(),
        };
        if decoded_kind != kind {
            return Err(CodecError::UnexpectedKind {
                expected: kind.to_string(),
                found: decoded_kind.to_string(),
            });
        }
        self.decode_into(data, target)
    }

    fn decode_to_version(&self, data: &[u8], version: &str) -> Result<BridgeObject, CodecError> {
        if version != self.version.as_str() {
            return Err(CodecError::UnsupportedTargetVersion(version.to_string()));
        }
        self.decode(data)
    }

    fn encode(&self, object: &BridgeObject) -> Result<Vec<u8>, CodecError> {
        match object {
            BridgeObject::Resource(resource) => {
                let doc = TypedResourceDoc::from_resource(resource, &self.version);
                serde_json::to_vec(&doc).map_err(|err| Self::serialization_error(&err))
            }
            BridgeObject::List(list) => {
                let doc = TypedListDoc {
                    kind: DYNAMIC_RESOURCE_LIST_KIND.to_string(),
                    api_version: self.version.to_string(),
                    resource_version: list.resource_version.clone(),
                    items: list
                        .items
                        .iter()
                        .map(|item| TypedResourceDoc::from_resource(item, &self.version))
                        .collect(),
                };
                serde_json::to_vec(&doc).map_err(|err| Self::serialization_error(&err))
            }
            BridgeObject::Status(status) => {
                let mut value = serde_json::to_value(status)
                    .map_err(|err| Self::serialization_error(&err))?;
                if let Value::Object(map) = &mut value {
                    map.insert(
                        "kind".to_string(),
                        Value::String(STATUS_KIND.to_string()),
                    );
                    map.insert(
                        "apiVersion".to_string(),
                        Value::String(self.version.to_string()),
                    );
                }
                serde_json::to_vec(&value).map_err(|err| Self::serialization_error(&err))
            }
            BridgeObject::Foreign(foreign) => {
                serde_json::to_vec(&foreign.body).map_err(|err| Self::serialization_error(&err))
            }
        }
    }
}

// ============================================================================
// SECTION: Typed Object Factory
// ============================================================================

/// Fallback factory over a fixed set of typed-registry kinds.
#[derive(Debug, Clone)]
pub struct TypedObjectCreator {
    /// Version this factory allocates for.
    version: ApiVersion,
    /// Kinds the typed registry knows how to construct.
    kinds: BTreeSet<String>,
}

impl TypedObjectCreator {
    /// Creates a factory for a version and a set of known kinds.
    #[must_use]
    pub fn new(version: impl Into<ApiVersion>, kinds: impl IntoIterator<Item = String>) -> Self {
        Self {
            version: version.into(),
            kinds: kinds.into_iter().collect(),
        }
    }
}

impl ObjectCreator for TypedObjectCreator {
    fn create(&self, version: &str, kind: &str) -> Result<BridgeObject, FactoryError> {
        if version != self.version.as_str() {
            return Err(FactoryError::UnsupportedVersion {
                requested: version.to_string(),
                kind: kind.to_string(),
            });
        }
        if !self.kinds.contains(kind) {
            return Err(FactoryError::UnknownKind(kind.to_string()));
        }
        Ok(BridgeObject::Foreign(ForeignObject {
            api_version: self.version.clone(),
            kind: KindName::new(kind),
            body: Value::Object(serde_json::Map::new()),
        }))
    }
}
