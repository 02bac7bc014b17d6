use crate::world::{self, EnterEffect};

pub const NOT_IN_ROOM: &str = "You are not in a room.";
pub const NO_SUCH_EXIT: &str = "You can't go that way.";
pub const ITEM_NOT_IN_ROOM: &str = "Item not found in the room.";
pub const ITEM_NOT_CARRIED: &str = "You don't have that item in your inventory.";

/// The room the player stands in, if any.
fn current_room<'a>(world: &'a world::World, player: &world::Player) -> Option<&'a world::Room> {
    let key = player.current_room.as_deref()?;
    world.rooms.get(key)
}

pub fn handle_look(world: &world::World, player: &world::Player) -> String {
    let Some(room) = current_room(world, player) else {
        return NOT_IN_ROOM.to_string();
    };

    let mut desc = format!("{}\nItems in the room: ", room.desc);
    if room.items.is_empty() {
        desc.push_str("none.");
    } else {
        for item in &room.items {
            desc.push_str(&item.name);
            desc.push(' ');
        }
    }
    desc
}

pub fn handle_walk(world: &world::World, player: &mut world::Player, direction: &str) -> String {
    let Some(room) = current_room(world, player) else {
        return NOT_IN_ROOM.to_string();
    };

    let Some(target) = room.exits.get(direction) else {
        return NO_SUCH_EXIT.to_string();
    };

    let Some(next_room) = world.rooms.get(target) else {
        tracing::warn!(direction, target = %target, "exit points at a missing room");
        return NO_SUCH_EXIT.to_string();
    };

    tracing::debug!(
        from = ?player.current_room,
        to = %target,
        direction,
        "player moved"
    );
    player.current_room = Some(target.clone());

    match &next_room.on_enter {
        EnterEffect::Message(text) => text.clone(),
        EnterEffect::None => format!("You have entered {}.", next_room.name),
    }
}

pub fn handle_take(world: &mut world::World, player: &mut world::Player, item_name: &str) -> String {
    let Some(key) = player.current_room.as_deref() else {
        return NOT_IN_ROOM.to_string();
    };
    let Some(room) = world.rooms.get_mut(key) else {
        return NOT_IN_ROOM.to_string();
    };

    let Some(idx) = room.items.iter().position(|item| item.name == item_name) else {
        return ITEM_NOT_IN_ROOM.to_string();
    };

    let item = room.items.remove(idx);
    tracing::debug!(item = %item.name, room = %room.name, "item taken");
    player.inventory.push(item.name);

    format!("You have taken the {}.", item_name)
}

pub fn handle_wear(world: &world::World, player: &world::Player, item_name: &str) -> String {
    if current_room(world, player).is_none() {
        return NOT_IN_ROOM.to_string();
    }

    if player.has_item(item_name) {
        format!("You are now wearing the {}.", item_name)
    } else {
        ITEM_NOT_CARRIED.to_string()
    }
}

pub fn handle_use(
    world: &world::World,
    player: &world::Player,
    item_name: &str,
    target: &str,
) -> String {
    if current_room(world, player).is_none() {
        return NOT_IN_ROOM.to_string();
    }

    if player.has_item(item_name) {
        format!("You used the {} on {}.", item_name, target)
    } else {
        ITEM_NOT_CARRIED.to_string()
    }
}
