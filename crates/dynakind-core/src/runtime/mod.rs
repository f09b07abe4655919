// dynakind-core/src/runtime/mod.rs
// ============================================================================
// Module: Dynakind Runtime
// Description: Bridge component implementations.
// Purpose: Provide the codec, mapping overlay, factory, and test collaborators.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Runtime components implement the collaborator contracts for schema-free
//! kinds. All components are immutable after construction and carry only
//! their binding configuration plus delegate references, so concurrent use
//! needs no synchronization at this layer.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod codec;
pub mod creator;
pub mod mapper;
pub mod memory;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use codec::DynamicResourceCodec;
pub use creator::DynamicResourceCreator;
pub use mapper::DynamicResourceMapper;
pub use memory::InMemoryRestMapper;
pub use memory::MapperRegistration;
pub use memory::TypedJsonCodec;
pub use memory::TypedObjectCreator;
