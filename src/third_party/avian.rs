//! Avian2d physics configuration for the side-on slingshot scene.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Pixels per physics meter. Avian tunes its tolerances against this.
pub const PIXELS_PER_METER: f32 = 32.0;

/// Downward gravity in pixels per second squared.
pub const GRAVITY: Vec2 = Vec2::new(0.0, -9.81 * PIXELS_PER_METER);

// === Collision Layers ===

/// Physics collision layers.
///
/// - **Penguin**: the launched (or launchable) body.
/// - **Ground**: static level geometry the penguin lands on.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum CollisionLayer {
    #[default]
    Penguin,
    Ground,
}

// === Plugin ===

/// Installs avian2d. Kept out of the crate `plugin` so headless tests
/// don't pull in the physics schedule.
pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default().with_length_unit(PIXELS_PER_METER));
    app.insert_resource(Gravity(GRAVITY));

    #[cfg(feature = "dev")]
    app.add_plugins(PhysicsDebugPlugin::default());
}
