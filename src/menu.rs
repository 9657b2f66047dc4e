//! Menu tokens and the static command registry.
//!
//! Tokens `0` to `5` are the core menu. `6`, `7` and `8` expose the pub/sub,
//! expiration and caching demos, so they are valid choices rather than
//! invalid input.

use std::fmt;

/// One demonstration the dispatcher knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    Strings,
    Lists,
    Sets,
    SortedSets,
    Hashes,
    PubSub,
    Expiration,
    Caching,
}

impl Demo {
    /// Short human label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strings => "string examples",
            Self::Lists => "list examples",
            Self::Sets => "set examples",
            Self::SortedSets => "sorted set examples",
            Self::Hashes => "hash examples",
            Self::PubSub => "pub/sub example",
            Self::Expiration => "expiration examples",
            Self::Caching => "caching examples",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a matched token asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Run(Demo),
    Exit,
}

/// Static menu metadata used for both lookup and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub token: &'static str,
    pub description: &'static str,
    pub action: MenuAction,
}

/// Exit token, listed last in the menu.
pub const EXIT_TOKEN: &str = "0";

/// Built-in menu, in display order.
pub const MENU_ENTRIES: [MenuEntry; 9] = [
    MenuEntry {
        token: "1",
        description: "Run String Examples",
        action: MenuAction::Run(Demo::Strings),
    },
    MenuEntry {
        token: "2",
        description: "Run List Examples",
        action: MenuAction::Run(Demo::Lists),
    },
    MenuEntry {
        token: "3",
        description: "Run Set Examples",
        action: MenuAction::Run(Demo::Sets),
    },
    MenuEntry {
        token: "4",
        description: "Run Sorted Set Examples",
        action: MenuAction::Run(Demo::SortedSets),
    },
    MenuEntry {
        token: "5",
        description: "Run Hash Examples",
        action: MenuAction::Run(Demo::Hashes),
    },
    MenuEntry {
        token: "6",
        description: "Run Pub/Sub Example",
        action: MenuAction::Run(Demo::PubSub),
    },
    MenuEntry {
        token: "7",
        description: "Run Expiration & TTL Examples",
        action: MenuAction::Run(Demo::Expiration),
    },
    MenuEntry {
        token: "8",
        description: "Run Caching Examples",
        action: MenuAction::Run(Demo::Caching),
    },
    MenuEntry {
        token: EXIT_TOKEN,
        description: "Exit",
        action: MenuAction::Exit,
    },
];

/// Look up a menu choice. Callers trim input first; matching is exact.
pub fn lookup(token: &str) -> Option<MenuAction> {
    MENU_ENTRIES
        .iter()
        .find(|entry| entry.token == token)
        .map(|entry| entry.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_tokens_resolve() {
        assert_eq!(lookup("1"), Some(MenuAction::Run(Demo::Strings)));
        assert_eq!(lookup("2"), Some(MenuAction::Run(Demo::Lists)));
        assert_eq!(lookup("3"), Some(MenuAction::Run(Demo::Sets)));
        assert_eq!(lookup("4"), Some(MenuAction::Run(Demo::SortedSets)));
        assert_eq!(lookup("5"), Some(MenuAction::Run(Demo::Hashes)));
        assert_eq!(lookup("6"), Some(MenuAction::Run(Demo::PubSub)));
        assert_eq!(lookup("7"), Some(MenuAction::Run(Demo::Expiration)));
        assert_eq!(lookup("8"), Some(MenuAction::Run(Demo::Caching)));
        assert_eq!(lookup("0"), Some(MenuAction::Exit));
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        for token in ["", " ", "9", "01", "1 ", "exit", "q"] {
            assert_eq!(lookup(token), None, "token {token:?}");
        }
    }

    #[test]
    fn tokens_are_unique() {
        for (i, a) in MENU_ENTRIES.iter().enumerate() {
            for b in &MENU_ENTRIES[i + 1..] {
                assert_ne!(a.token, b.token);
            }
        }
    }

    #[test]
    fn exit_entry_is_last() {
        assert_eq!(MENU_ENTRIES[MENU_ENTRIES.len() - 1].token, EXIT_TOKEN);
    }
}
