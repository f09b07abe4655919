// dynakind-core/src/lib.rs
// ============================================================================
// Module: Dynakind Core Library
// Description: Public API surface for the schema-free resource bridge.
// Purpose: Expose envelope types, collaborator contracts, and bridge components.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Dynakind lets a REST framework built around statically typed, versioned
//! resources also serve schema-free kinds registered at runtime. The bridge
//! is an adapter triplet: a dynamic codec translating between opaque bytes
//! and a generic envelope without losing byte fidelity, a mapping overlay
//! substituting a kind-bound codec into the canonical REST mapping, and an
//! object factory allocating empty envelopes for the synthetic kinds.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use interfaces::CodecError;
pub use interfaces::FactoryError;
pub use interfaces::MappingError;
pub use interfaces::ObjectCreator;
pub use interfaces::ResourceCodec;
pub use interfaces::RestMapper;
pub use interfaces::RestMapping;
pub use interfaces::RestScope;
pub use runtime::DynamicResourceCodec;
pub use runtime::DynamicResourceCreator;
pub use runtime::DynamicResourceMapper;
pub use runtime::InMemoryRestMapper;
pub use runtime::MapperRegistration;
pub use runtime::TypedJsonCodec;
pub use runtime::TypedObjectCreator;
