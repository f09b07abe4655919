// dynakind-core/src/core/mod.rs
// ============================================================================
// Module: Dynakind Core Types
// Description: Canonical envelope, binding, and object types for the bridge.
// Purpose: Provide stable, serializable types shared by all bridge components.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the schema-free envelope, the immutable kind binding,
//! and the closed object sum the bridge operates over. These types carry no
//! behavior beyond construction and accessors.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod binding;
pub mod identifiers;
pub mod object;
pub mod resource;
pub mod status;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use binding::DYNAMIC_RESOURCE_KIND;
pub use binding::DYNAMIC_RESOURCE_LIST_KIND;
pub use binding::KindBinding;
pub use identifiers::ApiVersion;
pub use identifiers::KindName;
pub use object::BridgeObject;
pub use object::ForeignObject;
pub use resource::DynamicResource;
pub use resource::DynamicResourceList;
pub use status::StatusDocument;
pub use status::StatusOutcome;
