//! Character controller component proxy.

use glam::Vec3;
use script_core::{BindingError, ComponentKind, EngineBoundary, Entity, Field, Method, Value};

/// Grounded query and script-driven movement.
pub struct CharacterControllerComponent<'a, B: ?Sized> {
    boundary: &'a B,
    entity: Entity,
}

impl<'a, B: EngineBoundary + ?Sized> CharacterControllerComponent<'a, B> {
    /// Bind a character controller proxy for `entity`. Does not check the
    /// component exists; use [`EntityView`](crate::EntityView) for the
    /// checked path.
    #[must_use]
    pub fn new(boundary: &'a B, entity: Entity) -> Self {
        Self { boundary, entity }
    }

    /// The entity this proxy addresses.
    #[must_use]
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Whether the controller currently stands on ground. Read-only; the
    /// physics side owns this flag.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn is_grounded(&self) -> Result<bool, BindingError> {
        self.boundary
            .read(
                self.entity,
                ComponentKind::CharacterController,
                Field::Grounded,
            )?
            .into_bool()
    }

    /// Move the controller by `displacement`. How the engine resolves the
    /// move (collision, sliding, grounding) is its own business; the next
    /// [`is_grounded`](Self::is_grounded) read reflects the post-move state.
    ///
    /// # Errors
    ///
    /// Propagates boundary failures.
    pub fn move_by(&self, displacement: Vec3) -> Result<(), BindingError> {
        self.boundary
            .invoke(
                self.entity,
                ComponentKind::CharacterController,
                Method::Move,
                &[Value::Vec3(displacement)],
            )?
            .expect_unit()
    }
}
