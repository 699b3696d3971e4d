//! Peeved Penguins game library.

pub mod gameplay;
pub mod prelude;
pub mod screens;
pub mod third_party;

use bevy::prelude::*;

/// Z-layer for penguins (above level geometry).
pub const Z_PENGUIN: f32 = 10.0;

/// Primary game states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Initial loading state.
    #[default]
    Loading,
    /// A level is being played.
    InGame,
}

/// Everything except physics and windowing. The binary adds those.
pub fn plugin(app: &mut App) {
    app.init_state::<GameState>()
        .add_systems(Startup, setup_camera);

    app.add_plugins((screens::plugin, gameplay::plugin));
}

/// Spawns the 2D camera looking at the slingshot scene. Lives across
/// level restarts, so it is not scoped to `GameState::InGame`.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("Scene Camera"), Camera2d));
}
