//! Third-party plugin isolation.

mod avian;

pub use avian::{CollisionLayer, GRAVITY, PIXELS_PER_METER};

pub fn plugin(app: &mut bevy::prelude::App) {
    app.add_plugins(avian::plugin);
}
