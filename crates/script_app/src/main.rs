//! # script_app — scripted scene driver
//!
//! Drives the component bindings end to end against the in-memory host:
//! spawns a small scene, then reads and writes every component surface the
//! way gameplay script code would.

use anyhow::Result;
use glam::Vec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use script_components::EntityView;
use script_core::AssetHandle;
use script_host::HostEngine;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("script_app=info".parse()?))
        .init();

    info!("scene driver starting");

    let host = HostEngine::new();

    // A floor with a mesh and two material slots.
    let floor = host.spawn();
    host.attach_transform(floor)?;
    host.attach_mesh_renderer(floor, AssetHandle::from_raw(0x10), 2)?;

    // A kinematic platform.
    let platform = host.spawn();
    host.attach_transform(platform)?;
    host.attach_rigid_body(platform)?;

    // The player avatar.
    let avatar = host.spawn();
    host.attach_transform(avatar)?;
    host.attach_character_controller(avatar)?;
    host.set_grounded(avatar, true)?;

    info!(entities = host.entity_count(), "scene spawned");

    // Dress the floor.
    let floor_view = EntityView::new(&host, floor);
    floor_view.transform()?.set_scale(Vec3::new(20.0, 1.0, 20.0))?;
    let renderer = floor_view.mesh_renderer()?;
    renderer.set_material(0, AssetHandle::from_raw(0x20))?;
    renderer.set_material(1, AssetHandle::from_raw(0x21))?;
    let mesh = renderer.mesh_asset()?;
    let instance = renderer.instance()?;
    info!(%mesh, instance = instance.id(), "floor dressed");

    // Send the platform toward its patrol point.
    let platform_view = EntityView::new(&host, platform);
    platform_view
        .rigid_body()?
        .set_kinematic_target(Vec3::new(0.0, 4.0, 0.0), Vec3::ZERO)?;
    let target = host.kinematic_target(platform)?;
    info!(?target, "platform target set");

    // Walk the avatar a few steps forward.
    let avatar_view = EntityView::new(&host, avatar);
    let controller = avatar_view.character_controller()?;
    for _ in 0..3 {
        controller.move_by(Vec3::new(0.0, 0.0, 0.5))?;
    }
    let position = avatar_view.transform()?.translation()?;
    let grounded = controller.is_grounded()?;
    info!(?position, grounded, "avatar walked");

    info!(boundary_calls = host.call_count(), "scene driver done");
    Ok(())
}
