//! Command parsing for player input.

/// The fixed set of verbs the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Describe the current location.
    Look,
    /// Move along an exit.
    Go,
    /// Put on a wearable item.
    Wear,
    /// Pick up an item.
    Take,
    /// Apply an inventory item to a target.
    Use,
}

impl Verb {
    /// Every verb, in help order.
    pub const ALL: [Verb; 5] = [Verb::Look, Verb::Go, Verb::Wear, Verb::Take, Verb::Use];

    /// Match a token exactly (case-sensitive).
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.token() == token)
    }

    /// The token the player types.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Look => "осмотреться",
            Self::Go => "идти",
            Self::Wear => "надеть",
            Self::Take => "взять",
            Self::Use => "применить",
        }
    }

    /// Minimum number of arguments after the verb.
    pub fn arity(&self) -> usize {
        match self {
            Self::Look => 0,
            Self::Go | Self::Wear | Self::Take => 1,
            Self::Use => 2,
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look around the current location.
    Look,
    /// Go along the exit with this label.
    Go {
        /// The exit label.
        destination: String,
    },
    /// Wear an item lying here.
    Wear {
        /// The item name.
        item: String,
    },
    /// Take an item lying here.
    Take {
        /// The item name.
        item: String,
    },
    /// Apply an inventory item to a target.
    Use {
        /// The item name.
        item: String,
        /// The target name.
        target: String,
    },
    /// Empty input, unknown verb, or missing arguments.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Parse a player input string into a command.
///
/// Tokens are separated by whitespace. Arguments beyond a verb's arity are
/// ignored.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((first, args)) = words.split_first() else {
        return unknown(input);
    };
    let Some(verb) = Verb::parse(first) else {
        return unknown(input);
    };
    if args.len() < verb.arity() {
        return unknown(input);
    }

    match verb {
        Verb::Look => Command::Look,
        Verb::Go => Command::Go {
            destination: args[0].to_string(),
        },
        Verb::Wear => Command::Wear {
            item: args[0].to_string(),
        },
        Verb::Take => Command::Take {
            item: args[0].to_string(),
        },
        Verb::Use => Command::Use {
            item: args[0].to_string(),
            target: args[1].to_string(),
        },
    }
}

fn unknown(input: &str) -> Command {
    Command::Unknown {
        input: input.trim().to_string(),
    }
}
