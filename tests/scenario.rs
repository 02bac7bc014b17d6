use std::io::Cursor;

use mini_adventure::world::{Player, Room, World};
use mini_adventure::{GameState, default_world, run_session};

fn started() -> GameState {
    let mut state = GameState::new(default_world().unwrap());
    assert!(state.initialize());
    state
}

#[test]
fn walkthrough() {
    let mut state = started();

    assert_eq!(state.handle("take Key"), "You have taken the Key.");
    assert_eq!(state.handle("walk north"), "You have entered the living room.");
    assert_eq!(state.player.current_room.as_deref(), Some("living room"));
    assert_eq!(state.handle("walk south"), "You have entered the start room.");
    assert_eq!(state.player.current_room.as_deref(), Some("start init rooms"));
    assert_eq!(state.handle("wear Key"), "You are now wearing the Key.");
    assert_eq!(state.handle("use Key door"), "You used the Key on door.");
    assert_eq!(state.player.inventory, vec!["Key".to_string()]);
}

#[test]
fn items_stay_where_they_were_left() {
    let mut state = started();

    state.handle("walk north");
    assert_eq!(state.handle("take Book"), "You have taken the Book.");
    state.handle("walk south");
    assert_eq!(state.handle("take Book"), "Item not found in the room.");
    state.handle("walk north");
    assert_eq!(
        state.handle("look"),
        "A cozy living room with a fireplace.\nItems in the room: none."
    );
}

#[test]
fn one_way_exit() {
    let mut world = World::new("maze", "top");
    world.insert_room("top", Room::new("Top", "A ledge.").with_exit("down", "pit"));
    world.insert_room("pit", Room::new("Pit", "No way up."));

    let mut state = GameState::new(world);
    state.initialize();

    assert_eq!(state.handle("walk down"), "You have entered Pit.");
    assert_eq!(state.handle("walk up"), "You can't go that way.");
    assert_eq!(state.player.current_room.as_deref(), Some("pit"));
}

#[test]
fn player_outside_world() {
    let mut state = GameState::new(default_world().unwrap());
    state.player = Player {
        current_room: None,
        inventory: vec!["Key".to_string()],
    };

    for line in ["look", "walk north", "take Key", "wear Key", "use Key door"] {
        assert_eq!(state.handle(line), "You are not in a room.");
    }
    assert_eq!(state.player.inventory, vec!["Key".to_string()]);
}

#[test]
fn session_transcript() {
    let mut state = started();
    let script = "take Key\nwalk north\n\nfly\nwalk south\nuse Key door\nexit\nlook\n";
    let mut out: Vec<u8> = Vec::new();

    run_session(&mut state, Cursor::new(script), &mut out).unwrap();

    let expected = [
        "Enter command: You have taken the Key.",
        "Enter command: You have entered the living room.",
        "Enter command: No command provided.",
        "Enter command: Unknown command.",
        "Enter command: You have entered the start room.",
        "Enter command: You used the Key on door.",
        "Enter command: Exiting the game.",
        "",
    ]
    .join("\n");
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
