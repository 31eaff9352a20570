//! Transform component proxy.

use glam::Vec3;
use script_core::{BindingError, ComponentKind, EngineBoundary, Entity, Field, Value};

/// Spatial pose of an entity: translation, rotation (euler radians), scale.
///
/// Reads of different fields are independent round trips — there is no
/// snapshot consistency between reading `translation` and `rotation` if the
/// engine mutates the pose in between.
#[derive(Debug)]
pub struct TransformComponent<'a, B: ?Sized> {
    boundary: &'a B,
    entity: Entity,
}

impl<'a, B: EngineBoundary + ?Sized> TransformComponent<'a, B> {
    /// Bind a transform proxy for `entity`. Does not check the component
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

    /// World-space translation.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn translation(&self) -> Result<Vec3, BindingError> {
        self.boundary
            .read(self.entity, ComponentKind::Transform, Field::Translation)?
            .into_vec3()
    }

    /// Set the world-space translation.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn set_translation(&self, translation: Vec3) -> Result<(), BindingError> {
        self.boundary.write(
            self.entity,
            ComponentKind::Transform,
            Field::Translation,
            Value::Vec3(translation),
        )
    }

    /// Euler rotation in radians.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn rotation(&self) -> Result<Vec3, BindingError> {
        self.boundary
            .read(self.entity, ComponentKind::Transform, Field::Rotation)?
            .into_vec3()
    }

    /// Set the euler rotation in radians.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn set_rotation(&self, rotation: Vec3) -> Result<(), BindingError> {
        self.boundary.write(
            self.entity,
            ComponentKind::Transform,
            Field::Rotation,
            Value::Vec3(rotation),
        )
    }

    /// Scale.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn scale(&self) -> Result<Vec3, BindingError> {
        self.boundary
            .read(self.entity, ComponentKind::Transform, Field::Scale)?
            .into_vec3()
    }

    /// Set the scale.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn set_scale(&self, scale: Vec3) -> Result<(), BindingError> {
        self.boundary.write(
            self.entity,
            ComponentKind::Transform,
            Field::Scale,
            Value::Vec3(scale),
        )
    }
}
