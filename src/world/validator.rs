use std::fmt;

use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    // Walk keys in order so reports are stable
    for room_id in world.sorted_keys() {
        let room = &world.rooms[room_id];

        let mut directions: Vec<&String> = room.exits.keys().collect();
        directions.sort();
        for direction in directions {
            let target = &room.exits[direction];
            if !world.rooms.contains_key(target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, direction, target
                )));
            }
        }

        for (idx, item) in room.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' item #{} has an empty name",
                    room_id, idx
                )));
            } else if item.name.contains(char::is_whitespace) {
                // `take` only ever sees one whitespace-separated word
                errors.push(ValidationError::new(format!(
                    "room '{}' item '{}' contains whitespace and can never be taken",
                    room_id, item.name
                )));
            }
        }
    }

    errors
}
