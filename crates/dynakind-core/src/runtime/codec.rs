// dynakind-core/src/runtime/codec.rs
// ============================================================================
// Module: Dynamic Resource Codec
// Description: Byte-fidelity codec for schema-free resource payloads.
// Purpose: Bridge opaque JSON payloads into the typed codec contract.
// Dependencies: crate::core, crate::interfaces, serde, serde_json
// ============================================================================

//! ## Overview
//! The dynamic codec decodes only the envelope fields the framework needs
//! (kind, name, labels, resource version) and keeps everything else opaque.
//! Validation runs over a minimal typed header parsed once from the input;
//! the original byte span is retained untouched as the envelope's raw body,
//! so encoding a decoded resource returns the submitted bytes exactly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::core::BridgeObject;
use crate::core::DYNAMIC_RESOURCE_KIND;
use crate::core::DynamicResource;
use crate::core::DynamicResourceList;
use crate::core::KindBinding;
use crate::interfaces::CodecError;
use crate::interfaces::ResourceCodec;

// ============================================================================
// SECTION: Envelope Header
// ============================================================================

/// Minimal typed view of a payload, parsed once for validation.
///
/// Fields stay untyped `Value`s so shape problems map onto the envelope
/// error set instead of surfacing as serde failures.
#[derive(Debug, Deserialize)]
struct EnvelopeHeader {
    /// Top-level `kind` entry, any shape.
    #[serde(default)]
    kind: Option<Value>,
    /// Top-level `metadata` entry, any shape.
    #[serde(default)]
    metadata: Option<Value>,
}

// ============================================================================
// SECTION: Dynamic Codec
// ============================================================================

/// Codec bound to one registered schema-free kind.
///
/// Immutable after construction; safe to share across threads without
/// locking. Shapes outside the envelope set are forwarded to the delegate
/// general-purpose codec.
#[derive(Clone)]
pub struct DynamicResourceCodec {
    /// General-purpose codec for status documents and version translation.
    delegate: Arc<dyn ResourceCodec + Send + Sync>,
    /// Binding this codec validates against.
    binding: KindBinding,
}

impl DynamicResourceCodec {
    /// Creates a codec for one binding, wrapping a general-purpose delegate.
    #[must_use]
    pub const fn new(delegate: Arc<dyn ResourceCodec + Send + Sync>, binding: KindBinding) -> Self {
        Self { delegate, binding }
    }

    /// Returns the binding this codec serves.
    #[must_use]
    pub const fn binding(&self) -> &KindBinding {
        &self.binding
    }

    /// Validates payload bytes and builds the envelope they describe.
    ///
    /// Population writes into a scratch envelope and commits nothing on
    /// failure; the raw body is the exact input byte span.
    fn parse_envelope(&self, data: &[u8]) -> Result<DynamicResource, CodecError> {
        let header: EnvelopeHeader = serde_json::from_slice(data)
            .map_err(|err| CodecError::MalformedPayload(err.to_string()))?;

        let kind = match header.kind {
            Some(Value::String(kind)) => kind,
            _ => return Err(CodecError::MissingKind),
        };
        if kind != self.binding.kind().as_str() {
            return Err(CodecError::KindMismatch {
                expected: self.binding.kind().to_string(),
                found: kind,
            });
        }

        let Some(Value::Object(metadata)) = header.metadata else {
            return Err(CodecError::MissingMetadata);
        };

        let mut resource = DynamicResource::default();
        if let Some(token) = metadata.get("resourceVersion") {
            match token {
                Value::String(token) => resource.resource_version = Some(token.clone()),
                _ => return Err(CodecError::InvalidResourceVersion),
            }
        }

        let name = match metadata.get("name") {
            Some(Value::String(name)) => name.clone(),
            _ => return Err(CodecError::MissingName),
        };

        if let Some(Value::String(namespace)) = metadata.get("namespace") {
            resource.namespace = Some(namespace.clone());
        }

        if let Some(labels) = metadata.get("labels") {
            let Value::Object(labels) = labels else {
                return Err(CodecError::MalformedPayload(
                    "metadata.labels is not an object".to_string(),
                ));
            };
            for (key, value) in labels {
                match value {
                    Value::String(value) => {
                        resource.labels.insert(key.clone(), value.clone());
                    }
                    _ => {
                        return Err(CodecError::InvalidLabelValue { key: key.clone() });
                    }
                }
            }
        }

        resource.name = name;
        resource.raw_body = data.to_vec();
        Ok(resource)
    }

    /// Encodes a list as the literal wire template.
    ///
    /// The wrapper is a textual concatenation of each item's raw body; the
    /// embedded fragments are not re-validated or re-serialized.
    fn encode_list(&self, list: &DynamicResourceList) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"{\"kind\": \"");
        out.extend_from_slice(self.binding.list_kind().as_bytes());
        out.extend_from_slice(b"\", \"items\": [ ");
        for (index, item) in list.items.iter().enumerate() {
            if index > 0 {
                out.push(b',');
            }
            out.extend_from_slice(&item.raw_body);
        }
        out.extend_from_slice(b" ]}");
        out
    }
}

impl ResourceCodec for DynamicResourceCodec {
    fn decode(&self, data: &[u8]) -> Result<BridgeObject, CodecError> {
        Ok(BridgeObject::Resource(self.parse_envelope(data)?))
    }

    fn decode_into(&self, data: &[u8], target: &mut BridgeObject) -> Result<(), CodecError> {
        let BridgeObject::Resource(resource) = target else {
            return Err(CodecError::TypeMismatch);
        };
        *resource = self.parse_envelope(data)?;
        Ok(())
    }

    fn decode_into_with_version_kind(
        &self,
        data: &[u8],
        target: &mut BridgeObject,
        version: &str,
        kind: &str,
    ) -> Result<(), CodecError> {
        let BridgeObject::Resource(resource) = target else {
            return Err(CodecError::TypeMismatch);
        };
        if kind != DYNAMIC_RESOURCE_KIND {
            return Err(CodecError::UnexpectedKind {
                expected: DYNAMIC_RESOURCE_KIND.to_string(),
                found: kind.to_string(),
            });
        }

        let parsed: Value = serde_json::from_slice(data)
            .map_err(|err| CodecError::MalformedPayload(err.to_string()))?;
        let Value::Object(mut defaulted) = parsed else {
            return Err(CodecError::MalformedPayload(
                "payload is not a JSON object".to_string(),
            ));
        };

        match defaulted.get("kind") {
            None => {
                defaulted.insert("kind".to_string(), Value::String(kind.to_string()));
            }
            Some(Value::String(declared)) => {
                if declared != self.binding.kind().as_str() {
                    return Err(CodecError::KindConflict {
                        expected: self.binding.kind().to_string(),
                        found: declared.clone(),
                    });
                }
            }
            Some(_) => return Err(CodecError::MissingKind),
        }

        match defaulted.get("apiVersion") {
            None => {
                defaulted.insert("apiVersion".to_string(), Value::String(version.to_string()));
            }
            Some(Value::String(declared)) => {
                if declared != version {
                    return Err(CodecError::VersionConflict {
                        expected: version.to_string(),
                        found: declared.clone(),
                    });
                }
            }
            Some(_) => {
                return Err(CodecError::MalformedPayload(
                    "apiVersion is not a string".to_string(),
                ));
            }
        }

        // The defaulted copy is transient: population re-reads the original
        // bytes, so injected entries never reach the stored raw body. A
        // payload that omitted `kind` still fails the population pass.
        *resource = self.parse_envelope(data)?;
        Ok(())
    }

    fn decode_to_version(&self, data: &[u8], version: &str) -> Result<BridgeObject, CodecError> {
        let object = self.decode(data)?;
        let encoded = self.delegate.encode(&object)?;
        self.delegate.decode_to_version(&encoded, version)
    }

    fn encode(&self, object: &BridgeObject) -> Result<Vec<u8>, CodecError> {
        match object {
            BridgeObject::Resource(resource) => Ok(resource.raw_body.clone()),
            BridgeObject::List(list) => Ok(self.encode_list(list)),
            BridgeObject::Status(_) => self.delegate.encode(object),
            BridgeObject::Foreign(_) => Err(CodecError::UnsupportedType),
        }
    }
}
