use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
///
/// `rooms` is the only owner of room data. Exits and the player refer to rooms
/// by registry key.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub name: String,
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
}

/// What happens when the player walks into a room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EnterEffect {
    #[default]
    None,
    /// Replaces the default "You have entered ..." line.
    Message(String),
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub desc: String,
    pub items: Vec<Item>,
    pub exits: HashMap<String, String>, // direction -> room key
    pub on_enter: EnterEffect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub current_room: Option<String>,
    pub inventory: Vec<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Item { name: name.into() }
    }
}

impl Room {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            desc: desc.into(),
            items: Vec::new(),
            exits: HashMap::new(),
            on_enter: EnterEffect::None,
        }
    }

    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.items.push(Item::new(name));
        self
    }

    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), target.into());
        self
    }

    pub fn with_on_enter(mut self, text: impl Into<String>) -> Self {
        self.on_enter = EnterEffect::Message(text.into());
        self
    }
}

impl World {
    pub fn new(name: impl Into<String>, start_room: impl Into<String>) -> Self {
        World {
            name: name.into(),
            start_room: start_room.into(),
            rooms: HashMap::new(),
        }
    }

    pub fn insert_room(&mut self, key: impl Into<String>, room: Room) -> Option<Room> {
        self.rooms.insert(key.into(), room)
    }

    /// Room keys in a stable order, for listings.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.rooms.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }
}

impl Player {
    pub fn in_room(key: impl Into<String>) -> Self {
        Player {
            current_room: Some(key.into()),
            inventory: Vec::new(),
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i == name)
    }
}
