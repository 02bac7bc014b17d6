mod actions;
mod command;

pub use actions::{
    ITEM_NOT_CARRIED, ITEM_NOT_IN_ROOM, NO_SUCH_EXIT, NOT_IN_ROOM, handle_look, handle_take,
    handle_use, handle_walk, handle_wear,
};

pub use command::{Command, Parsed, Verb, parse_command};
