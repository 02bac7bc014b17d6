mod loader;
mod model;
mod validator;

pub use loader::{WorldError, default_world, load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{EnterEffect, Item, Player, Room, World};
pub use validator::{ValidationError, validate_world};
