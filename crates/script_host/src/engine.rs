//! In-memory engine state and the boundary implementation over it.
//!
//! [`HostEngine`] plays the native side of the boundary: it allocates entity
//! ids, owns one component record per entity, and answers every boundary
//! call from that state. Values read back are exactly the values written (a
//! faithful store); nothing is simulated beyond what the imperative
//! operations themselves do.
//!
//! Every crossing — including failed ones — is appended to a call journal so
//! tests can assert that the bindings issue one fresh call per access.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use script_core::{
    AssetHandle, BindingError, ComponentKind, EngineBoundary, Entity, Field, MeshInstance, Method,
    Value,
};

/// One recorded boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// The addressed entity.
    pub entity: Entity,
    /// The addressed component kind.
    pub kind: ComponentKind,
    /// Which operation crossed.
    pub op: CallOp,
}

/// The operation half of a [`CallRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOp {
    /// A `component_exists` query.
    Exists,
    /// A field read.
    Read(Field),
    /// A field write.
    Write(Field),
    /// A method invocation.
    Invoke(Method),
}

#[derive(Debug, Clone, Copy)]
struct TransformState {
    translation: Vec3,
    rotation: Vec3,
    scale: Vec3,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

#[derive(Debug, Clone)]
struct MeshRendererState {
    mesh: AssetHandle,
    instance: MeshInstance,
    materials: Vec<AssetHandle>,
}

#[derive(Debug, Clone, Copy, Default)]
struct RigidBodyState {
    linear_velocity: Vec3,
    kinematic_target: Option<(Vec3, Vec3)>,
}

#[derive(Debug, Clone, Copy, Default)]
struct CharacterControllerState {
    grounded: bool,
}

fn missing(entity: Entity, kind: ComponentKind) -> BindingError {
    BindingError::MissingComponent { entity, kind }
}

/// A single entity's component set.
#[derive(Debug, Default)]
struct EntityRecord {
    transform: Option<TransformState>,
    mesh_renderer: Option<MeshRendererState>,
    rigid_body: Option<RigidBodyState>,
    character_controller: Option<CharacterControllerState>,
}

impl EntityRecord {
    fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => self.transform.is_some(),
            ComponentKind::MeshRenderer => self.mesh_renderer.is_some(),
            ComponentKind::RigidBody => self.rigid_body.is_some(),
            ComponentKind::CharacterController => self.character_controller.is_some(),
        }
    }

    fn transform(&self, entity: Entity) -> Result<&TransformState, BindingError> {
        self.transform
            .as_ref()
            .ok_or_else(|| missing(entity, ComponentKind::Transform))
    }

    fn transform_mut(&mut self, entity: Entity) -> Result<&mut TransformState, BindingError> {
        self.transform
            .as_mut()
            .ok_or_else(|| missing(entity, ComponentKind::Transform))
    }

    fn mesh_renderer(&self, entity: Entity) -> Result<&MeshRendererState, BindingError> {
        self.mesh_renderer
            .as_ref()
            .ok_or_else(|| missing(entity, ComponentKind::MeshRenderer))
    }

    fn mesh_renderer_mut(&mut self, entity: Entity) -> Result<&mut MeshRendererState, BindingError> {
        self.mesh_renderer
            .as_mut()
            .ok_or_else(|| missing(entity, ComponentKind::MeshRenderer))
    }

    fn rigid_body(&self, entity: Entity) -> Result<&RigidBodyState, BindingError> {
        self.rigid_body
            .as_ref()
            .ok_or_else(|| missing(entity, ComponentKind::RigidBody))
    }

    fn rigid_body_mut(&mut self, entity: Entity) -> Result<&mut RigidBodyState, BindingError> {
        self.rigid_body
            .as_mut()
            .ok_or_else(|| missing(entity, ComponentKind::RigidBody))
    }

    fn character_controller(
        &self,
        entity: Entity,
    ) -> Result<&CharacterControllerState, BindingError> {
        self.character_controller
            .as_ref()
            .ok_or_else(|| missing(entity, ComponentKind::CharacterController))
    }

    fn character_controller_mut(
        &mut self,
        entity: Entity,
    ) -> Result<&mut CharacterControllerState, BindingError> {
        self.character_controller
            .as_mut()
            .ok_or_else(|| missing(entity, ComponentKind::CharacterController))
    }
}

#[derive(Debug)]
struct HostState {
    next_entity: u64,
    next_instance: u64,
    entities: HashMap<Entity, EntityRecord>,
    journal: Vec<CallRecord>,
}

impl HostState {
    fn new() -> Self {
        // IDs start at 1; 0 is the invalid sentinel.
        Self {
            next_entity: 1,
            next_instance: 1,
            entities: HashMap::new(),
            journal: Vec::new(),
        }
    }

    fn record(&self, entity: Entity) -> Result<&EntityRecord, BindingError> {
        self.entities
            .get(&entity)
            .ok_or(BindingError::InvalidEntity(entity))
    }

    fn record_mut(&mut self, entity: Entity) -> Result<&mut EntityRecord, BindingError> {
        self.entities
            .get_mut(&entity)
            .ok_or(BindingError::InvalidEntity(entity))
    }
}

/// The in-memory engine.
///
/// Methods take `&self`; state sits behind a mutex so the engine can be
/// shared wherever a boundary reference is needed.
#[derive(Debug)]
pub struct HostEngine {
    state: Mutex<HostState>,
}

impl HostEngine {
    /// Create an empty host with no entities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HostState::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap()
    }

    // ── Entity lifecycle ────────────────────────────────────────────────

    /// Spawn a new entity with no components.
    pub fn spawn(&self) -> Entity {
        let mut state = self.lock();
        let entity = Entity::from_raw(state.next_entity);
        state.next_entity += 1;
        state.entities.insert(entity, EntityRecord::default());
        debug!(%entity, "spawned");
        entity
    }

    /// Destroy an entity and all its components.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidEntity`] if the entity is not alive.
    pub fn despawn(&self, entity: Entity) -> Result<(), BindingError> {
        let mut state = self.lock();
        if state.entities.remove(&entity).is_none() {
            return Err(BindingError::InvalidEntity(entity));
        }
        debug!(%entity, "despawned");
        Ok(())
    }

    /// Returns `true` if the entity is currently alive.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.lock().entities.contains_key(&entity)
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.lock().entities.len()
    }

    // ── Component attachment ────────────────────────────────────────────
    //
    // At most one logical component of each kind per entity; attaching a
    // kind the entity already has replaces it.

    /// Attach an identity transform.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidEntity`] if the entity is not alive.
    pub fn attach_transform(&self, entity: Entity) -> Result<(), BindingError> {
        let mut state = self.lock();
        state.record_mut(entity)?.transform = Some(TransformState::default());
        debug!(%entity, "attached Transform");
        Ok(())
    }

    /// Attach a mesh renderer bound to `mesh`, with `material_slots` empty
    /// material slots.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidEntity`] if the entity is not alive.
    pub fn attach_mesh_renderer(
        &self,
        entity: Entity,
        mesh: AssetHandle,
        material_slots: u32,
    ) -> Result<(), BindingError> {
        let mut state = self.lock();
        let instance = MeshInstance(state.next_instance);
        state.record_mut(entity)?.mesh_renderer = Some(MeshRendererState {
            mesh,
            instance,
            materials: vec![AssetHandle::INVALID; material_slots as usize],
        });
        state.next_instance += 1;
        debug!(%entity, %mesh, "attached MeshRenderer");
        Ok(())
    }

    /// Attach a rigid body at rest.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidEntity`] if the entity is not alive.
    pub fn attach_rigid_body(&self, entity: Entity) -> Result<(), BindingError> {
        let mut state = self.lock();
        state.record_mut(entity)?.rigid_body = Some(RigidBodyState::default());
        debug!(%entity, "attached RigidBody");
        Ok(())
    }

    /// Attach a character controller, initially airborne.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidEntity`] if the entity is not alive.
    pub fn attach_character_controller(&self, entity: Entity) -> Result<(), BindingError> {
        let mut state = self.lock();
        state.record_mut(entity)?.character_controller = Some(CharacterControllerState::default());
        debug!(%entity, "attached CharacterController");
        Ok(())
    }

    // ── Host-side state access ──────────────────────────────────────────
    //
    // Engine-owned state the bindings cannot reach: grounding is decided by
    // the physics side, and the kinematic target is write-only through the
    // boundary.

    /// Set the grounded flag on a character controller.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidEntity`] or
    /// [`BindingError::MissingComponent`].
    pub fn set_grounded(&self, entity: Entity, grounded: bool) -> Result<(), BindingError> {
        let mut state = self.lock();
        state
            .record_mut(entity)?
            .character_controller_mut(entity)?
            .grounded = grounded;
        Ok(())
    }

    /// The last kinematic target set on the entity's rigid body, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidEntity`] or
    /// [`BindingError::MissingComponent`].
    pub fn kinematic_target(&self, entity: Entity) -> Result<Option<(Vec3, Vec3)>, BindingError> {
        let state = self.lock();
        Ok(state.record(entity)?.rigid_body(entity)?.kinematic_target)
    }

    // ── Call journal ────────────────────────────────────────────────────

    /// Total number of boundary crossings so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().journal.len()
    }

    /// Snapshot of all recorded crossings, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<CallRecord> {
        self.lock().journal.clone()
    }

    /// Forget all recorded crossings.
    pub fn clear_calls(&self) {
        self.lock().journal.clear();
    }
}

impl Default for HostEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn expect_args<const N: usize>(method: Method, args: &[Value]) -> Result<[Value; N], BindingError> {
    <[Value; N]>::try_from(args).map_err(|_| {
        BindingError::NativeCall(format!(
            "{method} expects {N} argument(s), got {}",
            args.len()
        ))
    })
}

impl EngineBoundary for HostEngine {
    fn component_exists(&self, entity: Entity, kind: ComponentKind) -> Result<bool, BindingError> {
        trace!(%entity, %kind, "component_exists");
        let mut state = self.lock();
        state.journal.push(CallRecord {
            entity,
            kind,
            op: CallOp::Exists,
        });
        Ok(state.record(entity)?.has(kind))
    }

    fn read(
        &self,
        entity: Entity,
        kind: ComponentKind,
        field: Field,
    ) -> Result<Value, BindingError> {
        trace!(%entity, %kind, %field, "read");
        let mut state = self.lock();
        state.journal.push(CallRecord {
            entity,
            kind,
            op: CallOp::Read(field),
        });
        if field.component_kind() != kind {
            return Err(BindingError::NativeCall(format!(
                "field {field} does not belong to {kind}"
            )));
        }
        let record = state.record(entity)?;
        match field {
            Field::Translation => Ok(Value::Vec3(record.transform(entity)?.translation)),
            Field::Rotation => Ok(Value::Vec3(record.transform(entity)?.rotation)),
            Field::Scale => Ok(Value::Vec3(record.transform(entity)?.scale)),
            Field::MeshAsset => Ok(Value::Asset(record.mesh_renderer(entity)?.mesh)),
            Field::MeshInstance => Ok(Value::Instance(record.mesh_renderer(entity)?.instance)),
            Field::Material(index) => record
                .mesh_renderer(entity)?
                .materials
                .get(index as usize)
                .copied()
                .map(Value::Asset)
                .ok_or_else(|| {
                    BindingError::NativeCall(format!("material slot {index} out of range"))
                }),
            Field::LinearVelocity => Ok(Value::Vec3(record.rigid_body(entity)?.linear_velocity)),
            Field::Grounded => Ok(Value::Bool(record.character_controller(entity)?.grounded)),
        }
    }

    fn write(
        &self,
        entity: Entity,
        kind: ComponentKind,
        field: Field,
        value: Value,
    ) -> Result<(), BindingError> {
        trace!(%entity, %kind, %field, ?value, "write");
        let mut state = self.lock();
        state.journal.push(CallRecord {
            entity,
            kind,
            op: CallOp::Write(field),
        });
        if field.component_kind() != kind {
            return Err(BindingError::NativeCall(format!(
                "field {field} does not belong to {kind}"
            )));
        }
        let record = state.record_mut(entity)?;
        match field {
            Field::Translation => record.transform_mut(entity)?.translation = value.into_vec3()?,
            Field::Rotation => record.transform_mut(entity)?.rotation = value.into_vec3()?,
            Field::Scale => record.transform_mut(entity)?.scale = value.into_vec3()?,
            Field::MeshAsset => record.mesh_renderer_mut(entity)?.mesh = value.into_asset()?,
            Field::MeshInstance | Field::Grounded => {
                return Err(BindingError::NativeCall(format!("{field} is read-only")));
            }
            Field::Material(index) => {
                let renderer = record.mesh_renderer_mut(entity)?;
                let slot = renderer.materials.get_mut(index as usize).ok_or_else(|| {
                    BindingError::NativeCall(format!("material slot {index} out of range"))
                })?;
                *slot = value.into_asset()?;
            }
            Field::LinearVelocity => {
                record.rigid_body_mut(entity)?.linear_velocity = value.into_vec3()?;
            }
        }
        Ok(())
    }

    fn invoke(
        &self,
        entity: Entity,
        kind: ComponentKind,
        method: Method,
        args: &[Value],
    ) -> Result<Value, BindingError> {
        trace!(%entity, %kind, %method, "invoke");
        let mut state = self.lock();
        state.journal.push(CallRecord {
            entity,
            kind,
            op: CallOp::Invoke(method),
        });
        if method.component_kind() != kind {
            return Err(BindingError::NativeCall(format!(
                "method {method} does not belong to {kind}"
            )));
        }
        let record = state.record_mut(entity)?;
        match method {
            Method::SetKinematicTarget => {
                let [position, rotation] = expect_args::<2>(method, args)?;
                record.rigid_body_mut(entity)?.kinematic_target =
                    Some((position.into_vec3()?, rotation.into_vec3()?));
            }
            Method::Move => {
                let [displacement] = expect_args::<1>(method, args)?;
                let displacement = displacement.into_vec3()?;
                record.character_controller(entity)?;
                // The controller moves the entity; its pose lives in the
                // transform when one is attached.
                if let Some(transform) = record.transform.as_mut() {
                    transform.translation += displacement;
                }
            }
        }
        Ok(Value::Unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_despawn_lifecycle() {
        let host = HostEngine::new();
        let e1 = host.spawn();
        let e2 = host.spawn();
        assert_ne!(e1, e2);
        assert!(e1.is_valid());
        assert!(host.is_alive(e1));
        assert_eq!(host.entity_count(), 2);

        host.despawn(e1).unwrap();
        assert!(!host.is_alive(e1));
        assert_eq!(host.entity_count(), 1);
        assert_eq!(host.despawn(e1), Err(BindingError::InvalidEntity(e1)));
    }

    #[test]
    fn test_attach_requires_live_entity() {
        let host = HostEngine::new();
        let dead = Entity::from_raw(77);
        assert_eq!(
            host.attach_transform(dead),
            Err(BindingError::InvalidEntity(dead))
        );
    }

    #[test]
    fn test_component_exists() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_transform(entity).unwrap();

        assert!(
            host.component_exists(entity, ComponentKind::Transform)
                .unwrap()
        );
        assert!(
            !host
                .component_exists(entity, ComponentKind::RigidBody)
                .unwrap()
        );

        host.despawn(entity).unwrap();
        assert_eq!(
            host.component_exists(entity, ComponentKind::Transform),
            Err(BindingError::InvalidEntity(entity))
        );
    }

    #[test]
    fn test_read_write_roundtrip() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_transform(entity).unwrap();

        let v = Vec3::new(1.0, 2.0, 3.0);
        host.write(
            entity,
            ComponentKind::Transform,
            Field::Translation,
            Value::Vec3(v),
        )
        .unwrap();
        let back = host
            .read(entity, ComponentKind::Transform, Field::Translation)
            .unwrap();
        assert_eq!(back, Value::Vec3(v));
    }

    #[test]
    fn test_read_missing_component() {
        let host = HostEngine::new();
        let entity = host.spawn();
        assert_eq!(
            host.read(entity, ComponentKind::Transform, Field::Translation),
            Err(BindingError::MissingComponent {
                entity,
                kind: ComponentKind::Transform
            })
        );
    }

    #[test]
    fn test_write_wrong_shape_is_type_mismatch() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_transform(entity).unwrap();
        let err = host
            .write(
                entity,
                ComponentKind::Transform,
                Field::Translation,
                Value::Bool(true),
            )
            .unwrap_err();
        assert_eq!(
            err,
            BindingError::TypeMismatch {
                expected: "vec3",
                found: "bool"
            }
        );
    }

    #[test]
    fn test_read_only_fields_reject_writes() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_character_controller(entity).unwrap();
        let err = host
            .write(
                entity,
                ComponentKind::CharacterController,
                Field::Grounded,
                Value::Bool(true),
            )
            .unwrap_err();
        assert!(matches!(err, BindingError::NativeCall(_)));
    }

    #[test]
    fn test_mismatched_kind_field_pairing_rejected() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_transform(entity).unwrap();
        let err = host
            .read(entity, ComponentKind::RigidBody, Field::Translation)
            .unwrap_err();
        assert!(matches!(err, BindingError::NativeCall(_)));
    }

    #[test]
    fn test_material_slots() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_mesh_renderer(entity, AssetHandle::from_raw(5), 2)
            .unwrap();

        let mat = AssetHandle::from_raw(9);
        host.write(
            entity,
            ComponentKind::MeshRenderer,
            Field::Material(0),
            Value::Asset(mat),
        )
        .unwrap();
        assert_eq!(
            host.read(entity, ComponentKind::MeshRenderer, Field::Material(0))
                .unwrap(),
            Value::Asset(mat)
        );
        // Untouched slot reads back as the null asset.
        assert_eq!(
            host.read(entity, ComponentKind::MeshRenderer, Field::Material(1))
                .unwrap(),
            Value::Asset(AssetHandle::INVALID)
        );
        // Out-of-range slot is rejected engine-side.
        let err = host
            .read(entity, ComponentKind::MeshRenderer, Field::Material(2))
            .unwrap_err();
        assert!(matches!(err, BindingError::NativeCall(_)));
    }

    #[test]
    fn test_mesh_instances_are_distinct() {
        let host = HostEngine::new();
        let a = host.spawn();
        let b = host.spawn();
        host.attach_mesh_renderer(a, AssetHandle::from_raw(1), 0)
            .unwrap();
        host.attach_mesh_renderer(b, AssetHandle::from_raw(1), 0)
            .unwrap();

        let ia = host
            .read(a, ComponentKind::MeshRenderer, Field::MeshInstance)
            .unwrap()
            .into_instance()
            .unwrap();
        let ib = host
            .read(b, ComponentKind::MeshRenderer, Field::MeshInstance)
            .unwrap()
            .into_instance()
            .unwrap();
        assert!(ia.is_valid());
        assert!(ib.is_valid());
        assert_ne!(ia, ib);
    }

    #[test]
    fn test_invoke_wrong_arity() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_rigid_body(entity).unwrap();
        let err = host
            .invoke(
                entity,
                ComponentKind::RigidBody,
                Method::SetKinematicTarget,
                &[Value::Vec3(Vec3::ZERO)],
            )
            .unwrap_err();
        assert!(matches!(err, BindingError::NativeCall(_)));
    }

    #[test]
    fn test_journal_records_every_crossing_in_order() {
        let host = HostEngine::new();
        let entity = host.spawn();
        host.attach_transform(entity).unwrap();
        assert_eq!(host.call_count(), 0);

        host.read(entity, ComponentKind::Transform, Field::Translation)
            .unwrap();
        host.write(
            entity,
            ComponentKind::Transform,
            Field::Scale,
            Value::Vec3(Vec3::ONE),
        )
        .unwrap();
        // Failed crossings are journaled too.
        let _ = host.read(entity, ComponentKind::Transform, Field::Grounded);

        let calls = host.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].op, CallOp::Read(Field::Translation));
        assert_eq!(calls[1].op, CallOp::Write(Field::Scale));
        assert_eq!(calls[2].op, CallOp::Read(Field::Grounded));

        host.clear_calls();
        assert_eq!(host.call_count(), 0);
    }
}
