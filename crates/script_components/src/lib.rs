//! # script_components
//!
//! Typed component proxies: the surface script code actually touches.
//!
//! An [`EntityView`] binds an entity id to an engine boundary and hands out
//! per-kind proxies after checking the component exists. Each proxy accessor
//! is exactly one boundary call — proxies hold no data beyond the id and the
//! boundary reference, so they can never answer from stale state.

pub mod character_controller;
pub mod mesh_renderer;
pub mod rigid_body;
pub mod transform;
pub mod view;

pub use character_controller::CharacterControllerComponent;
pub use mesh_renderer::MeshRendererComponent;
pub use rigid_body::RigidBodyComponent;
pub use transform::TransformComponent;
pub use view::EntityView;
