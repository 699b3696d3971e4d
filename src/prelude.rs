//! Common imports for the entire crate.

pub use bevy::prelude::*;

pub use crate::GameState;
pub use crate::gameplay::{Penguin, spawn_penguin};
