//! Gameplay domain plugins.

pub mod penguin;

use bevy::prelude::*;

pub use penguin::{LaunchCount, LaunchReported, Penguin, spawn_penguin};

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(penguin::plugin);
}
