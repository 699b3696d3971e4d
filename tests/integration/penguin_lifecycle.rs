//! Penguins are created with the level and destroyed with it.

use bevy::prelude::*;
use peeved_penguins::GameState;
use peeved_penguins::gameplay::{LaunchCount, LaunchReported, Penguin};
use peeved_penguins::screens::LAUNCHER_POSITION;
use pretty_assertions::assert_eq;

use crate::{create_game_app, penguins};

fn enter_level(app: &mut App) {
    app.update();
    app.update();
}

#[test]
fn entering_level_spawns_one_unlaunched_penguin() {
    let mut app = create_game_app();
    enter_level(&mut app);

    let found = penguins(&mut app);
    assert_eq!(found.len(), 1);
    assert!(!found[0].1.is_launched());

    let transform = app
        .world()
        .get::<Transform>(found[0].0)
        .expect("penguin transform");
    assert_eq!(transform.translation.truncate(), LAUNCHER_POSITION);
}

#[test]
fn launch_is_visible_on_later_frames() {
    let mut app = create_game_app();
    enter_level(&mut app);

    let (entity, _) = penguins(&mut app)[0];
    app.world_mut()
        .get_mut::<Penguin>(entity)
        .expect("penguin component")
        .set_launched(true);
    app.update();
    app.update();

    let found = penguins(&mut app);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, entity);
    assert!(found[0].1.is_launched());
}

#[test]
fn restarting_level_replaces_launched_penguin() {
    let mut app = create_game_app();
    enter_level(&mut app);

    let (first, _) = penguins(&mut app)[0];
    app.world_mut()
        .get_mut::<Penguin>(first)
        .expect("penguin component")
        .set_launched(true);

    // Leaving the level despawns it; loading sends us straight back.
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Loading);
    app.update();
    assert!(penguins(&mut app).is_empty());
    assert!(app.world().get_entity(first).is_err());

    app.update();
    let found = penguins(&mut app);
    assert_eq!(found.len(), 1);
    assert_ne!(found[0].0, first);
    assert!(!found[0].1.is_launched());
}

#[test]
fn launch_is_counted_once_across_frames() {
    let mut app = create_game_app();
    enter_level(&mut app);

    let (entity, _) = penguins(&mut app)[0];
    for _ in 0..2 {
        app.world_mut()
            .get_mut::<Penguin>(entity)
            .expect("penguin component")
            .set_launched(true);
        app.update();
    }

    assert_eq!(app.world().resource::<LaunchCount>().0, 1);
    assert!(app.world().get::<LaunchReported>(entity).is_some());
}
