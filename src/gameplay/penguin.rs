//! The penguin: a sprite that remembers whether it has left the slingshot.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::third_party::CollisionLayer;
use crate::{GameState, Z_PENGUIN};

// === Constants ===

/// Collision radius of a penguin (pixels).
pub const PENGUIN_RADIUS: f32 = 16.0;

/// Penguin body color (slate blue).
const PENGUIN_COLOR: Color = Color::srgb(0.2, 0.25, 0.45);

// === Components ===

/// Launch state for a penguin entity.
///
/// Drawing and positioning come from the required `Sprite` and `Transform`
/// components on the same entity. This component only tracks whether the
/// launch has happened.
///
/// `launched` goes `false → true` once per play attempt. The setter does
/// not enforce that; a new attempt spawns a new penguin.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component, Default)]
#[require(Sprite, Transform)]
pub struct Penguin {
    launched: bool,
}

impl Penguin {
    /// A penguin still sitting in the launcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { launched: false }
    }

    #[must_use]
    pub const fn is_launched(&self) -> bool {
        self.launched
    }

    /// Stores `launched` as given. No side effects on physics or rendering.
    pub const fn set_launched(&mut self, launched: bool) {
        self.launched = launched;
    }
}

/// Spawn a penguin at `position` (z is replaced by the penguin layer).
/// Single source of truth for the penguin archetype.
pub fn spawn_penguin(commands: &mut Commands, position: Vec2) -> Entity {
    let entity = commands
        .spawn((
            Name::new("Penguin"),
            Penguin::new(),
            Sprite::from_color(PENGUIN_COLOR, Vec2::splat(PENGUIN_RADIUS * 2.0)),
            Transform::from_xyz(position.x, position.y, Z_PENGUIN),
            // Held in the launcher: kinematic until something propels it.
            RigidBody::Kinematic,
            Collider::circle(PENGUIN_RADIUS),
            CollisionLayers::new([CollisionLayer::Penguin], [CollisionLayer::Ground]),
            DespawnOnExit(GameState::InGame),
        ))
        .id();
    debug!("Spawned penguin {entity} at {position}");
    entity
}

/// Marker: this penguin's launch has already been reported.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct LaunchReported;

// === Resources ===

/// Number of distinct penguin launches seen this session.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct LaunchCount(pub u32);

// === Systems ===

/// Reports each penguin's first observed launch exactly once.
/// Setting the flag to `true` again does not count as a new launch.
fn report_launches(
    mut commands: Commands,
    penguins: Query<(Entity, &Penguin), (Changed<Penguin>, Without<LaunchReported>)>,
    mut count: ResMut<LaunchCount>,
) {
    for (entity, penguin) in &penguins {
        if !penguin.is_launched() {
            continue;
        }
        commands.entity(entity).insert(LaunchReported);
        count.0 += 1;
        debug!("Penguin {entity} launched");
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Penguin>()
        .register_type::<LaunchReported>()
        .register_type::<LaunchCount>()
        .init_resource::<LaunchCount>();

    app.add_systems(
        Update,
        report_launches.run_if(in_state(GameState::InGame)),
    );
}
