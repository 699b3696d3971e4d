//! In-game screen: puts a fresh penguin in the launcher.
//!
//! Everything spawned here is scoped to `GameState::InGame`, so leaving and
//! re-entering the state is how a level restarts.

use bevy::prelude::*;

use crate::GameState;
use crate::gameplay::spawn_penguin;

/// Where the penguin sits before it is launched (world pixels).
pub const LAUNCHER_POSITION: Vec2 = Vec2::new(-320.0, -80.0);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), load_penguin);
}

fn load_penguin(mut commands: Commands) {
    let penguin = spawn_penguin(&mut commands, LAUNCHER_POSITION);
    info!("Penguin {penguin} ready in launcher");
}
