//! The engine capability boundary.
//!
//! Everything the bindings do ends up as one call through [`EngineBoundary`].
//! The trait is implemented once per host: the real engine behind an FFI
//! shim in production, an in-memory store in tests. Consumers hold it by
//! reference (`&B` or `&dyn EngineBoundary`) — the bindings own no engine
//! state of their own.

use crate::entity::Entity;
use crate::error::BindingError;
use crate::registry::{ComponentKind, Field, Method};
use crate::value::Value;

/// Get/set/invoke surface of the host engine, keyed by
/// `(entity, component kind, field or method)`.
///
/// ## Contract
///
/// - Every call is a single synchronous round trip. No caching, batching, or
///   retrying happens on either side of the trait; two consecutive reads are
///   two crossings, with no snapshot consistency between them.
/// - Any operation addressing a dead entity fails with
///   [`BindingError::InvalidEntity`] rather than answering from stale state.
/// - Addressing a component the entity does not have fails with
///   [`BindingError::MissingComponent`].
/// - A `(kind, field)` or `(kind, method)` pairing the engine does not
///   support — including writes to read-only fields — is rejected with
///   [`BindingError::NativeCall`].
pub trait EngineBoundary {
    /// Returns whether `entity` currently has a component of `kind`.
    ///
    /// # Errors
    ///
    /// Fails with [`BindingError::InvalidEntity`] if the entity is dead.
    fn component_exists(&self, entity: Entity, kind: ComponentKind) -> Result<bool, BindingError>;

    /// Read one field of one component.
    ///
    /// # Errors
    ///
    /// Fails per the trait contract above.
    fn read(&self, entity: Entity, kind: ComponentKind, field: Field)
    -> Result<Value, BindingError>;

    /// Write one field of one component.
    ///
    /// # Errors
    ///
    /// Fails per the trait contract above.
    fn write(
        &self,
        entity: Entity,
        kind: ComponentKind,
        field: Field,
        value: Value,
    ) -> Result<(), BindingError>;

    /// Invoke a component method with the given arguments, forwarded
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Fails per the trait contract above; argument shape errors are the
    /// engine's to report.
    fn invoke(
        &self,
        entity: Entity,
        kind: ComponentKind,
        method: Method,
        args: &[Value],
    ) -> Result<Value, BindingError>;
}
