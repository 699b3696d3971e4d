//! Loading screen plugin.

use bevy::prelude::*;

use crate::GameState;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        check_loading_complete.run_if(in_state(GameState::Loading)),
    );
}

/// Nothing to load yet: go straight to the level.
fn check_loading_complete(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
