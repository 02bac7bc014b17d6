use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::model::{EnterEffect, Item, Room, World};
use super::validator::{ValidationError, validate_world};

const DEFAULT_WORLD: &str = include_str!("../../assets/default_world.toml");

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse world: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("world failed validation: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<&str>>()
        .join("; ")
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    #[serde(default)]
    name: String,
    start_room: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    items: Vec<String>,

    #[serde(default)]
    on_enter: Option<String>,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_from_str(&contents)
}

/// The two-room world bundled with the binary.
pub fn default_world() -> Result<World, WorldError> {
    load_world_from_str(DEFAULT_WORLD)
}

pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::InvalidData(
            "world.start_room may not be empty".to_string(),
        ));
    }

    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(WorldError::InvalidData(format!(
                "Duplicate room id: {}",
                room_cfg.id
            )));
        }

        if room_cfg.name.trim().is_empty() {
            return Err(WorldError::InvalidData(format!(
                "Room '{}' has an empty name",
                room_cfg.id
            )));
        }

        let mut exits: HashMap<String, String> = HashMap::new();
        for e in room_cfg.exit {
            if exits.contains_key(&e.direction) {
                return Err(WorldError::InvalidData(format!(
                    "Room '{}' has duplicate exit '{}'",
                    room_cfg.id, e.direction
                )));
            }
            exits.insert(e.direction, e.target);
        }

        let on_enter = match room_cfg.on_enter {
            Some(text) => EnterEffect::Message(text),
            None => EnterEffect::None,
        };

        rooms_map.insert(
            room_cfg.id,
            Room {
                name: room_cfg.name,
                desc: normalize_multiline_desc(&room_cfg.desc),
                items: room_cfg.items.into_iter().map(Item::new).collect(),
                exits,
                on_enter,
            },
        );
    }

    let world = World {
        name: world_file.world.name,
        start_room: world_file.world.start_room,
        rooms: rooms_map,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Invalid(errors));
    }

    tracing::debug!(
        world = %world.name,
        rooms = world.rooms.len(),
        "world loaded"
    );

    Ok(world)
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        // Indentation inside TOML strings never reaches the player
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else {
            match pending_blank_lines {
                // wrapped line
                0 => result.push(' '),
                1 => result.push('\n'),
                // paragraph break
                _ => result.push_str("\n\n"),
            }
            result.push_str(trimmed);
        }

        pending_blank_lines = 0;
    }

    result
}
