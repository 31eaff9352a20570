//! Rigid body component proxy.

use glam::Vec3;
use script_core::{BindingError, ComponentKind, EngineBoundary, Entity, Field, Method, Value};

/// Physics body driven kinematically from script.
pub struct RigidBodyComponent<'a, B: ?Sized> {
    boundary: &'a B,
    entity: Entity,
}

impl<'a, B: EngineBoundary + ?Sized> RigidBodyComponent<'a, B> {
    /// Bind a rigid body proxy for `entity`. Does not check the component
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

    /// Set the pose the simulation should move this body toward. Write-only:
    /// there is no corresponding read, the target is consumed engine-side.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn set_kinematic_target(
        &self,
        target_position: Vec3,
        target_rotation: Vec3,
    ) -> Result<(), BindingError> {
        self.boundary
            .invoke(
                self.entity,
                ComponentKind::RigidBody,
                Method::SetKinematicTarget,
                &[Value::Vec3(target_position), Value::Vec3(target_rotation)],
            )?
            .expect_unit()
    }

    /// Linear velocity of the body.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn linear_velocity(&self) -> Result<Vec3, BindingError> {
        self.boundary
            .read(self.entity, ComponentKind::RigidBody, Field::LinearVelocity)?
            .into_vec3()
    }

    /// Set the linear velocity of the body.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn set_linear_velocity(&self, velocity: Vec3) -> Result<(), BindingError> {
        self.boundary.write(
            self.entity,
            ComponentKind::RigidBody,
            Field::LinearVelocity,
            Value::Vec3(velocity),
        )
    }
}

#[cfg(test)]
mod tests {
    use script_host::HostEngine;

    use super::*;

    fn host_with_body() -> (HostEngine, Entity) {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_rigid_body(entity).unwrap();
        (host, entity)
    }

    #[test]
    fn test_kinematic_target_lands_host_side() {
        let (host, entity) = host_with_body();
        let body = RigidBodyComponent::new(&host, entity);

        assert_eq!(host.kinematic_target(entity).unwrap(), None);
        body.set_kinematic_target(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO)
            .unwrap();
        assert_eq!(
            host.kinematic_target(entity).unwrap(),
            Some((Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO))
        );
    }

    #[test]
    fn test_linear_velocity_roundtrip() {
        let (host, entity) = host_with_body();
        let body = RigidBodyComponent::new(&host, entity);

        assert_eq!(body.linear_velocity().unwrap(), Vec3::ZERO);
        body.set_linear_velocity(Vec3::new(0.0, -9.8, 0.0)).unwrap();
        assert_eq!(body.linear_velocity().unwrap(), Vec3::new(0.0, -9.8, 0.0));
    }

    #[test]
    fn test_target_on_missing_body() {
        let host = HostEngine::new();
        let entity = host.spawn();
        let body = RigidBodyComponent::new(&host, entity);

        assert_eq!(
            body.set_kinematic_target(Vec3::ZERO, Vec3::ZERO).unwrap_err(),
            BindingError::MissingComponent {
                entity,
                kind: ComponentKind::RigidBody
            }
        );
    }
}
