//! Entity-level component lookup.

use script_core::{BindingError, ComponentKind, EngineBoundary, Entity};

use crate::character_controller::CharacterControllerComponent;
use crate::mesh_renderer::MeshRendererComponent;
use crate::rigid_body::RigidBodyComponent;
use crate::transform::TransformComponent;

/// A script-side view of one entity.
///
/// The view is a pure lookup shim: it owns nothing, and each component
/// accessor verifies the component exists before handing out a proxy. An
/// accessor for a kind the entity lacks fails with
/// [`BindingError::MissingComponent`] — it never returns a usable proxy.
pub struct EntityView<'a, B: ?Sized> {
    boundary: &'a B,
    entity: Entity,
}

impl<'a, B: EngineBoundary + ?Sized> EntityView<'a, B> {
    /// Bind a view of `entity` over `boundary`.
    #[must_use]
    pub fn new(boundary: &'a B, entity: Entity) -> Self {
        Self { boundary, entity }
    }

    /// The entity this view addresses.
    #[must_use]
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Returns whether the entity currently has a component of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidEntity`] if the entity is dead.
    pub fn has_component(&self, kind: ComponentKind) -> Result<bool, BindingError> {
        self.boundary.component_exists(self.entity, kind)
    }

    fn ensure_component(&self, kind: ComponentKind) -> Result<(), BindingError> {
        if self.boundary.component_exists(self.entity, kind)? {
            Ok(())
        } else {
            Err(BindingError::MissingComponent {
                entity: self.entity,
                kind,
            })
        }
    }

    /// The entity's transform component.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::MissingComponent`] if the entity has no
    /// transform, or [`BindingError::InvalidEntity`] if it is dead.
    pub fn transform(&self) -> Result<TransformComponent<'a, B>, BindingError> {
        self.ensure_component(ComponentKind::Transform)?;
        Ok(TransformComponent::new(self.boundary, self.entity))
    }

    /// The entity's mesh renderer component.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EntityView::transform`].
    pub fn mesh_renderer(&self) -> Result<MeshRendererComponent<'a, B>, BindingError> {
        self.ensure_component(ComponentKind::MeshRenderer)?;
        Ok(MeshRendererComponent::new(self.boundary, self.entity))
    }

    /// The entity's rigid body component.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EntityView::transform`].
    pub fn rigid_body(&self) -> Result<RigidBodyComponent<'a, B>, BindingError> {
        self.ensure_component(ComponentKind::RigidBody)?;
        Ok(RigidBodyComponent::new(self.boundary, self.entity))
    }

    /// The entity's character controller component.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EntityView::transform`].
    pub fn character_controller(&self) -> Result<CharacterControllerComponent<'a, B>, BindingError> {
        self.ensure_component(ComponentKind::CharacterController)?;
        Ok(CharacterControllerComponent::new(self.boundary, self.entity))
    }
}

#[cfg(test)]
mod tests {
    use script_host::HostEngine;

    use super::*;

    #[test]
    fn test_missing_component_never_yields_proxy() {
        let host = HostEngine::new();
        let entity = host.spawn();
        let view = EntityView::new(&host, entity);

        let err = view.transform().unwrap_err();
        assert_eq!(
            err,
            BindingError::MissingComponent {
                entity,
                kind: ComponentKind::Transform
            }
        );
    }

    #[test]
    fn test_has_component() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_rigid_body(entity).unwrap();
        let view = EntityView::new(&host, entity);

        assert!(view.has_component(ComponentKind::RigidBody).unwrap());
        assert!(!view.has_component(ComponentKind::Transform).unwrap());
    }

    #[test]
    fn test_dead_entity_fails_lookup() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_transform(entity).unwrap();
        host.despawn(entity).unwrap();

        let view = EntityView::new(&host, entity);
        assert_eq!(
            view.transform().unwrap_err(),
            BindingError::InvalidEntity(entity)
        );
    }

    #[test]
    fn test_view_works_through_dyn_boundary() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_transform(entity).unwrap();

        let boundary: &dyn EngineBoundary = &host;
        let view = EntityView::new(boundary, entity);
        assert!(view.transform().is_ok());
    }
}
