//! Component kinds and the fields/methods each kind exposes.
//!
//! Boundary calls are addressed by `(entity, kind, field)` or
//! `(entity, kind, method)`. The keys are closed enums rather than strings
//! or runtime reflection, so an accessor for a field that does not exist is
//! unrepresentable at compile time. Each [`Field`] and [`Method`] knows the
//! [`ComponentKind`] it belongs to; boundaries reject mismatched pairings.

use serde::{Deserialize, Serialize};

/// The component kinds exposed to scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Spatial pose: translation, rotation, scale.
    Transform,
    /// Mesh asset binding and per-slot materials.
    MeshRenderer,
    /// Physics body driven kinematically from script.
    RigidBody,
    /// Grounded query and script-driven movement.
    CharacterController,
}

impl ComponentKind {
    /// Human-readable name of the component kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transform => "Transform",
            Self::MeshRenderer => "MeshRenderer",
            Self::RigidBody => "RigidBody",
            Self::CharacterController => "CharacterController",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A readable and/or writable field of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// World-space translation (`Transform`, read/write).
    Translation,
    /// Euler rotation in radians (`Transform`, read/write).
    Rotation,
    /// Scale (`Transform`, read/write).
    Scale,
    /// Bound mesh asset (`MeshRenderer`, read/write).
    MeshAsset,
    /// Engine-derived mesh instance (`MeshRenderer`, read-only).
    MeshInstance,
    /// Material asset in the given slot (`MeshRenderer`, read/write).
    Material(u32),
    /// Linear velocity (`RigidBody`, read/write).
    LinearVelocity,
    /// Whether the controller currently stands on ground
    /// (`CharacterController`, read-only).
    Grounded,
}

impl Field {
    /// The component kind this field belongs to.
    #[must_use]
    pub const fn component_kind(self) -> ComponentKind {
        match self {
            Self::Translation | Self::Rotation | Self::Scale => ComponentKind::Transform,
            Self::MeshAsset | Self::MeshInstance | Self::Material(_) => ComponentKind::MeshRenderer,
            Self::LinearVelocity => ComponentKind::RigidBody,
            Self::Grounded => ComponentKind::CharacterController,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Translation => f.write_str("translation"),
            Self::Rotation => f.write_str("rotation"),
            Self::Scale => f.write_str("scale"),
            Self::MeshAsset => f.write_str("mesh_asset"),
            Self::MeshInstance => f.write_str("mesh_instance"),
            Self::Material(index) => write!(f, "material[{index}]"),
            Self::LinearVelocity => f.write_str("linear_velocity"),
            Self::Grounded => f.write_str("grounded"),
        }
    }
}

/// An imperative operation on a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Set the pose a kinematic body should move toward
    /// (`RigidBody`; args: target position, target rotation).
    SetKinematicTarget,
    /// Move the controller by a displacement
    /// (`CharacterController`; args: displacement).
    Move,
}

impl Method {
    /// The component kind this method belongs to.
    #[must_use]
    pub const fn component_kind(self) -> ComponentKind {
        match self {
            Self::SetKinematicTarget => ComponentKind::RigidBody,
            Self::Move => ComponentKind::CharacterController,
        }
    }

    /// Human-readable name of the method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SetKinematicTarget => "set_kinematic_target",
            Self::Move => "move",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_map_to_owning_kind() {
        assert_eq!(Field::Translation.component_kind(), ComponentKind::Transform);
        assert_eq!(Field::Rotation.component_kind(), ComponentKind::Transform);
        assert_eq!(Field::Scale.component_kind(), ComponentKind::Transform);
        assert_eq!(Field::MeshAsset.component_kind(), ComponentKind::MeshRenderer);
        assert_eq!(Field::MeshInstance.component_kind(), ComponentKind::MeshRenderer);
        assert_eq!(Field::Material(3).component_kind(), ComponentKind::MeshRenderer);
        assert_eq!(Field::LinearVelocity.component_kind(), ComponentKind::RigidBody);
        assert_eq!(
            Field::Grounded.component_kind(),
            ComponentKind::CharacterController
        );
    }

    #[test]
    fn test_methods_map_to_owning_kind() {
        assert_eq!(
            Method::SetKinematicTarget.component_kind(),
            ComponentKind::RigidBody
        );
        assert_eq!(
            Method::Move.component_kind(),
            ComponentKind::CharacterController
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ComponentKind::MeshRenderer.to_string(), "MeshRenderer");
        assert_eq!(Field::Material(2).to_string(), "material[2]");
        assert_eq!(Method::Move.to_string(), "move");
    }
}
