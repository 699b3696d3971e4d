//! Screen plugins for each game state.

mod in_game;
mod loading;

use bevy::prelude::*;

pub use in_game::LAUNCHER_POSITION;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((loading::plugin, in_game::plugin));
}
