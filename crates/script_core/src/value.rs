//! Typed values crossing the engine boundary.
//!
//! Every read returns a [`Value`] and every write or invocation argument is
//! one. The `into_*` accessors unwrap a value into the shape an accessor
//! expects, failing with [`BindingError::TypeMismatch`] when the boundary
//! answered with something else.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::asset::{AssetHandle, MeshInstance};
use crate::error::BindingError;

/// A typed value passed across the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// No value; the result of a purely imperative call.
    Unit,
    /// A boolean flag.
    Bool(bool),
    /// A 3-component vector.
    Vec3(Vec3),
    /// An asset reference.
    Asset(AssetHandle),
    /// A mesh-instance handle.
    Instance(MeshInstance),
}

impl Value {
    /// The shape name used in mismatch errors.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Vec3(_) => "vec3",
            Self::Asset(_) => "asset",
            Self::Instance(_) => "instance",
        }
    }

    /// Unwrap a [`Value::Vec3`].
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::TypeMismatch`] for any other shape.
    pub fn into_vec3(self) -> Result<Vec3, BindingError> {
        match self {
            Self::Vec3(v) => Ok(v),
            other => Err(BindingError::TypeMismatch {
                expected: "vec3",
                found: other.kind_name(),
            }),
        }
    }

    /// Unwrap a [`Value::Bool`].
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::TypeMismatch`] for any other shape.
    pub fn into_bool(self) -> Result<bool, BindingError> {
        match self {
            Self::Bool(b) => Ok(b),
            other => Err(BindingError::TypeMismatch {
                expected: "bool",
                found: other.kind_name(),
            }),
        }
    }

    /// Unwrap a [`Value::Asset`].
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::TypeMismatch`] for any other shape.
    pub fn into_asset(self) -> Result<AssetHandle, BindingError> {
        match self {
            Self::Asset(handle) => Ok(handle),
            other => Err(BindingError::TypeMismatch {
                expected: "asset",
                found: other.kind_name(),
            }),
        }
    }

    /// Unwrap a [`Value::Instance`].
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::TypeMismatch`] for any other shape.
    pub fn into_instance(self) -> Result<MeshInstance, BindingError> {
        match self {
            Self::Instance(instance) => Ok(instance),
            other => Err(BindingError::TypeMismatch {
                expected: "instance",
                found: other.kind_name(),
            }),
        }
    }

    /// Assert a [`Value::Unit`] result from an imperative call.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::TypeMismatch`] for any other shape.
    pub fn expect_unit(self) -> Result<(), BindingError> {
        match self {
            Self::Unit => Ok(()),
            other => Err(BindingError::TypeMismatch {
                expected: "unit",
                found: other.kind_name(),
            }),
        }
    }
}
