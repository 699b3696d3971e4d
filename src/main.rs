//! Peeved Penguins entry point.

use peeved_penguins::prelude::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Peeved Penguins".to_string(),
                        resolution: (1136, 640).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins((peeved_penguins::plugin, peeved_penguins::third_party::plugin))
        .run();
}
