//! # script_core
//!
//! Core types for the scripting-side component bindings: the vocabulary that
//! every call into the engine is expressed in.
//!
//! This crate provides:
//!
//! - [`Entity`] — lightweight `u64` entity identifiers, allocated engine-side.
//! - [`AssetHandle`] / [`MeshInstance`] — opaque references into engine-owned
//!   resources.
//! - [`ComponentKind`], [`Field`], [`Method`] — the tagged keys a boundary
//!   call is addressed by.
//! - [`Value`] — the typed values that cross the boundary.
//! - [`EngineBoundary`] — the capability trait the host engine implements.
//! - [`BindingError`] — the failure taxonomy surfaced to script code.

pub mod asset;
pub mod boundary;
pub mod entity;
pub mod error;
pub mod registry;
pub mod value;

pub use asset::{AssetHandle, MeshInstance};
pub use boundary::EngineBoundary;
pub use entity::Entity;
pub use error::BindingError;
pub use registry::{ComponentKind, Field, Method};
pub use value::Value;

// Re-export the vector type used throughout the binding surface.
pub use glam::Vec3;
