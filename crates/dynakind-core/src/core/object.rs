// dynakind-core/src/core/object.rs
// ============================================================================
// Module: Bridge Object Sum Type
// Description: Closed set of object shapes that flow through the bridge.
// Purpose: Replace duck-typed dispatch with an exhaustive tagged union.
// Dependencies: crate::core::{identifiers, resource, status}, serde, serde_json
// ============================================================================

//! ## Overview
//! Every object handed to or produced by the bridge is one of a closed set
//! of shapes. Encoding matches exhaustively over this set; shapes the
//! dynamic codec does not own are rejected rather than falling through a
//! default branch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::ApiVersion;
use crate::core::identifiers::KindName;
use crate::core::resource::DynamicResource;
use crate::core::resource::DynamicResourceList;
use crate::core::status::StatusDocument;

// ============================================================================
// SECTION: Foreign Object
// ============================================================================

/// Typed-registry object this bridge does not own.
///
/// Produced by the fallback factory for kinds outside the binding; the
/// dynamic codec refuses to encode these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignObject {
    /// API version the owning registry constructed the object for.
    #[serde(rename = "apiVersion")]
    pub api_version: ApiVersion,
    /// Kind name in the owning registry.
    pub kind: KindName,
    /// Object body as generic JSON.
    pub body: Value,
}

// ============================================================================
// SECTION: Bridge Object
// ============================================================================

/// Object shapes that flow through codec, mapper, and factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BridgeObject {
    /// Single schema-free resource envelope.
    Resource(DynamicResource),
    /// List of envelopes for one kind.
    List(DynamicResourceList),
    /// Generic status/error document.
    Status(StatusDocument),
    /// Typed object owned by the surrounding registry.
    Foreign(ForeignObject),
}

impl BridgeObject {
    /// Returns a new empty envelope object.
    #[must_use]
    pub fn empty_resource() -> Self {
        Self::Resource(DynamicResource::default())
    }

    /// Returns a new empty envelope list object.
    #[must_use]
    pub fn empty_list() -> Self {
        Self::List(DynamicResourceList::default())
    }

    /// Returns the inner envelope when this object is a single resource.
    #[must_use]
    pub const fn as_resource(&self) -> Option<&DynamicResource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    /// Returns the inner list when this object is an envelope list.
    #[must_use]
    pub const fn as_list(&self) -> Option<&DynamicResourceList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }
}
