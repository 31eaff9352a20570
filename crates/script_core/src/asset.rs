//! Opaque handles into engine-owned resources.
//!
//! Assets (meshes, materials) and derived render objects live entirely on the
//! engine side; scripts only ever hold 64-bit handles to them. Neither type
//! here can be dereferenced locally — handles are passed back across the
//! boundary for the engine to resolve.

use serde::{Deserialize, Serialize};

/// An opaque reference to an engine asset (mesh, material, ...).
///
/// The engine keys assets by 64-bit ID; `0` means "no asset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetHandle(pub u64);

impl AssetHandle {
    /// The null asset handle.
    pub const INVALID: AssetHandle = AssetHandle(0);

    /// Create an asset handle from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this handle refers to an asset (non-zero).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AssetHandle({})", self.0)
    }
}

/// A read-only handle to an engine-side mesh-instance object.
///
/// Produced by the mesh renderer binding; the engine derives the instance
/// from the bound mesh asset and owns its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshInstance(pub u64);

impl MeshInstance {
    /// The null instance handle.
    pub const INVALID: MeshInstance = MeshInstance(0);

    /// Returns the raw `u64` handle.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this handle refers to a live instance (non-zero).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_handle_validity() {
        assert!(!AssetHandle::INVALID.is_valid());
        assert!(AssetHandle::from_raw(7).is_valid());
    }

    #[test]
    fn test_asset_handle_serialization_roundtrip() {
        let handle = AssetHandle::from_raw(0xDEAD_BEEF);
        let bytes = rmp_serde::to_vec(&handle).unwrap();
        let restored: AssetHandle = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(handle, restored);
    }

    #[test]
    fn test_mesh_instance_validity() {
        assert!(!MeshInstance::INVALID.is_valid());
        assert!(MeshInstance(1).is_valid());
    }
}
