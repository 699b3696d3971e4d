//! Headless integration tests driving the full game plugin.

mod penguin_lifecycle;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use peeved_penguins::gameplay::Penguin;

pub fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(peeved_penguins::plugin);
    app
}

pub fn penguins(app: &mut App) -> Vec<(Entity, Penguin)> {
    let mut query = app.world_mut().query::<(Entity, &Penguin)>();
    query
        .iter(app.world())
        .map(|(entity, penguin)| (entity, *penguin))
        .collect()
}
