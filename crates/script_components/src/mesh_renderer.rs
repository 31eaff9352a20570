//! Mesh renderer component proxy.

use script_core::{
    AssetHandle, BindingError, ComponentKind, EngineBoundary, Entity, Field, MeshInstance, Value,
};

/// Mesh asset binding and per-slot materials of an entity.
pub struct MeshRendererComponent<'a, B: ?Sized> {
    boundary: &'a B,
    entity: Entity,
}

impl<'a, B: EngineBoundary + ?Sized> MeshRendererComponent<'a, B> {
    /// Bind a mesh renderer proxy for `entity`. Does not check the component
    /// exists; use [`EntityView`](crate::EntityView) for the checked path.
    #[must_use]
    pub fn new(boundary: &'a B, entity: Entity) -> Self {
        Self { boundary, entity }
    }

    /// The entity this proxy addresses.
    #[must_use]
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// The bound mesh asset.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn mesh_asset(&self) -> Result<AssetHandle, BindingError> {
        self.boundary
            .read(self.entity, ComponentKind::MeshRenderer, Field::MeshAsset)?
            .into_asset()
    }

    /// Bind a different mesh asset.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn set_mesh_asset(&self, mesh: AssetHandle) -> Result<(), BindingError> {
        self.boundary.write(
            self.entity,
            ComponentKind::MeshRenderer,
            Field::MeshAsset,
            Value::Asset(mesh),
        )
    }

    /// Handle to the engine-derived mesh instance. Read-only.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn instance(&self) -> Result<MeshInstance, BindingError> {
        self.boundary
            .read(self.entity, ComponentKind::MeshRenderer, Field::MeshInstance)?
            .into_instance()
    }

    /// The material asset in slot `index`.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures; an out-of-range slot is rejected by the
    /// engine.
    pub fn material(&self, index: u32) -> Result<AssetHandle, BindingError> {
        self.boundary
            .read(
                self.entity,
                ComponentKind::MeshRenderer,
                Field::Material(index),
            )?
            .into_asset()
    }

    /// Put a material asset into slot `index`.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures; an out-of-range slot is rejected by the
    /// engine.
    pub fn set_material(&self, index: u32, material: AssetHandle) -> Result<(), BindingError> {
        self.boundary.write(
            self.entity,
            ComponentKind::MeshRenderer,
            Field::Material(index),
            Value::Asset(material),
        )
    }
}
