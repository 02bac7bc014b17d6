pub mod engine;
pub mod session;
pub mod world;

use engine::{
    Command, Parsed, handle_look, handle_take, handle_use, handle_walk, handle_wear, parse_command,
};
use world::{Player, World};

pub use session::{banner, run_session};
pub use world::{default_world, load_world_from_file, load_world_from_str};

/// One game session: the world it plays in and the single player.
#[derive(Debug, Clone)]
pub struct GameState {
    pub world: World,
    pub player: Player,
}

impl GameState {
    /// The player starts outside the world until `initialize` puts them in.
    pub fn new(world: World) -> Self {
        GameState {
            world,
            player: Player::default(),
        }
    }

    /// Place the player in the world's start room.
    pub fn initialize(&mut self) -> bool {
        if self.world.rooms.contains_key(&self.world.start_room) {
            self.player.current_room = Some(self.world.start_room.clone());
            true
        } else {
            tracing::warn!(start_room = %self.world.start_room, "start room not found");
            false
        }
    }

    /// Process a single line of player input and return the response text.
    pub fn handle(&mut self, input: &str) -> String {
        let parsed = parse_command(input);
        tracing::trace!(input, ?parsed, "command parsed");

        match parsed {
            Parsed::Empty => "No command provided.".to_string(),
            Parsed::Unknown(verb) => {
                tracing::debug!(verb, "unknown command");
                "Unknown command.".to_string()
            }
            Parsed::MissingArgs(verb) => {
                tracing::debug!(verb = verb.as_str(), "missing arguments");
                verb.prompt().unwrap_or_default().to_string()
            }
            Parsed::Command(cmd) => match cmd {
                Command::Look => handle_look(&self.world, &self.player),
                Command::Walk { direction } => {
                    handle_walk(&self.world, &mut self.player, direction)
                }
                Command::Take { item } => handle_take(&mut self.world, &mut self.player, item),
                Command::Wear { item } => handle_wear(&self.world, &self.player, item),
                Command::Use { item, target } => {
                    handle_use(&self.world, &self.player, item, target)
                }
            },
        }
    }
}
