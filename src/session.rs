use std::io::{self, BufRead, Write};

use crate::GameState;
use crate::world::World;

pub const PROMPT: &str = "Enter command: ";
pub const EXIT_COMMAND: &str = "exit";

/// Startup help text followed by every room with its registry key.
pub fn banner(world: &World) -> String {
    let mut text = String::new();
    text.push_str("Welcome to the game!\n");
    text.push_str("Available commands:\n");
    text.push_str("look                   - look around\n");
    text.push_str("walk <direction>       - walk in a direction (e.g. walk north)\n");
    text.push_str("take <item>            - pick up an item\n");
    text.push_str("wear <item>            - wear an item\n");
    text.push_str("use <item> <target>    - use an item on something\n");
    text.push_str("exit                   - leave the game\n");
    text.push_str("\nRooms:\n");
    for key in world.sorted_keys() {
        let room = &world.rooms[key];
        text.push_str(&format!("- {} (key: {})\n", room.name, key));
    }
    text
}

/// Feed lines from `input` to the game until `exit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut GameState,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut line = String::new();
    let mut turns: u64 = 0;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        // Only the terminator goes; "exit" must match exactly
        let command = line.trim_end_matches(['\n', '\r']);
        if command == EXIT_COMMAND {
            writeln!(output, "Exiting the game.")?;
            break;
        }

        turns += 1;
        let response = state.handle(command);
        writeln!(output, "{}", response)?;
    }

    tracing::debug!(turns, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_world;
    use std::io::Cursor;

    fn run(script: &str) -> (GameState, String) {
        let mut state = GameState::new(default_world().unwrap());
        state.initialize();
        let mut out: Vec<u8> = Vec::new();
        run_session(&mut state, Cursor::new(script.as_bytes()), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_stops_the_loop() {
        let (state, out) = run("exit\ntake Key\n");
        assert_eq!(out, "Enter command: Exiting the game.\n");
        assert_eq!(state.world.rooms["start init rooms"].items.len(), 1);
    }

    #[test]
    fn test_exit_match_is_exact() {
        let (_, out) = run("Exit\n exit\nexit\n");
        assert_eq!(
            out,
            "Enter command: Unknown command.\n\
             Enter command: Unknown command.\n\
             Enter command: Exiting the game.\n"
        );
    }

    #[test]
    fn test_end_of_input() {
        let (state, out) = run("take Key");
        assert_eq!(out, "Enter command: You have taken the Key.\nEnter command: ");
        assert_eq!(state.player.inventory, vec!["Key".to_string()]);
    }

    #[test]
    fn test_crlf_lines() {
        let (_, out) = run("walk north\r\nexit\r\n");
        assert_eq!(
            out,
            "Enter command: You have entered the living room.\nEnter command: Exiting the game.\n"
        );
    }

    #[test]
    fn test_banner_lists_rooms_by_key() {
        let text = banner(&default_world().unwrap());
        assert!(text.starts_with("Welcome to the game!\n"));
        assert!(text.ends_with(
            "\nRooms:\n- Living Room (key: living room)\n- Start Room (key: start init rooms)\n"
        ));
    }
}
