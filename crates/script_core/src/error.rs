//! Binding-layer error types.

use crate::entity::Entity;
use crate::registry::ComponentKind;

/// Errors surfaced by boundary calls.
///
/// All failures propagate to the caller immediately; the binding layer does
/// no retrying and no recovery.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The identifier does not resolve to a live entity.
    #[error("entity {} is not alive", .0.id())]
    InvalidEntity(Entity),

    /// The entity lacks the requested component kind.
    #[error("entity {} has no {} component", .entity.id(), .kind)]
    MissingComponent {
        /// The addressed entity.
        entity: Entity,
        /// The absent component kind.
        kind: ComponentKind,
    },

    /// The engine rejected or failed the call for reasons of its own.
    #[error("native call failed: {0}")]
    NativeCall(String),

    /// The boundary answered with a value of the wrong shape.
    #[error("boundary returned {found}, expected {expected}")]
    TypeMismatch {
        /// The shape the accessor expected.
        expected: &'static str,
        /// The shape actually returned.
        found: &'static str,
    },
}
