// dynakind-core/src/core/resource.rs
// ============================================================================
// Module: Dynamic Resource Envelopes
// Description: In-memory envelope around one opaque schema-free payload.
// Purpose: Carry the identity fields the framework needs plus the verbatim bytes.
// Dependencies: base64, serde
// ============================================================================

//! ## Overview
//! A [`DynamicResource`] lifts only the fields the surrounding framework
//! needs for identity and indexing (name, labels, resource version) out of an
//! opaque JSON payload. The payload itself is retained verbatim in
//! [`DynamicResource::raw_body`], which is the sole source of truth for
//! persistence and re-encoding. The codec never reconstructs or reflows it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Envelope Entity
// ============================================================================

/// One schema-free resource instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DynamicResource {
    /// Resource name, lifted from `metadata.name`.
    pub name: String,
    /// Optional container scope, carried through without validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Labels lifted from `metadata.labels`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Opaque optimistic-concurrency token, passed through unmodified.
    #[serde(
        default,
        rename = "resourceVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_version: Option<String>,
    /// Exact payload bytes as received. Byte-identical to the decoded input.
    #[serde(default, rename = "data", with = "raw_body_base64")]
    pub raw_body: Vec<u8>,
}

/// Ordered list of envelopes for the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DynamicResourceList {
    /// Envelopes in list order.
    #[serde(default)]
    pub items: Vec<DynamicResource>,
    /// Optional list-level concurrency token attached by the caller.
    #[serde(
        default,
        rename = "resourceVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_version: Option<String>,
}

// ============================================================================
// SECTION: Raw Body Field Codec
// ============================================================================

/// Base64 field codec for the verbatim payload bytes.
mod raw_body_base64 {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    /// Serializes payload bytes as a base64 string.
    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    /// Deserializes payload bytes from a base64 string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text.as_bytes()).map_err(serde::de::Error::custom)
    }
}
