//! Command parser for the five game verbs.
//!
//! Examples:
//!   "look"               -> Command::Look
//!   "walk north"         -> Command::Walk { direction: "north" }
//!   "use Key door"       -> Command::Use { item: "Key", target: "door" }
//!   "take Key and more"  -> Command::Take { item: "Key" } (extra words ignored)
//!   "Look"               -> Parsed::Unknown (verbs are case-sensitive)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Look,
    Walk,
    Take,
    Wear,
    Use,
}

impl Verb {
    pub fn from_token(token: &str) -> Option<Verb> {
        match token {
            "look" => Some(Verb::Look),
            "walk" => Some(Verb::Walk),
            "take" => Some(Verb::Take),
            "wear" => Some(Verb::Wear),
            "use" => Some(Verb::Use),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Look => "look",
            Verb::Walk => "walk",
            Verb::Take => "take",
            Verb::Wear => "wear",
            Verb::Use => "use",
        }
    }

    pub fn min_args(&self) -> usize {
        match self {
            Verb::Look => 0,
            Verb::Walk | Verb::Take | Verb::Wear => 1,
            Verb::Use => 2,
        }
    }

    /// Shown when the verb is given fewer than `min_args` arguments.
    /// `None` for verbs that take no arguments.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Verb::Look => None,
            Verb::Walk => Some("Where do you want to walk?"),
            Verb::Take => Some("What do you want to take?"),
            Verb::Wear => Some("What do you want to wear?"),
            Verb::Use => Some("What do you want to use and on what?"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Look,
    Walk { direction: &'a str },
    Take { item: &'a str },
    Wear { item: &'a str },
    Use { item: &'a str, target: &'a str },
}

/// Outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<'a> {
    Empty,
    Unknown(&'a str),
    MissingArgs(Verb),
    Command(Command<'a>),
}

pub fn parse_command(input: &str) -> Parsed<'_> {
    let mut tokens = input.split_whitespace();

    let Some(first) = tokens.next() else {
        return Parsed::Empty;
    };

    let Some(verb) = Verb::from_token(first) else {
        return Parsed::Unknown(first);
    };

    let args: Vec<&str> = tokens.collect();
    if args.len() < verb.min_args() {
        return Parsed::MissingArgs(verb);
    }

    let cmd = match verb {
        Verb::Look => Command::Look,
        Verb::Walk => Command::Walk { direction: args[0] },
        Verb::Take => Command::Take { item: args[0] },
        Verb::Wear => Command::Wear { item: args[0] },
        Verb::Use => Command::Use {
            item: args[0],
            target: args[1],
        },
    };

    Parsed::Command(cmd)
}
