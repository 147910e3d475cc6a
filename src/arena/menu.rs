/// Main menu actions, keyed by the number the player types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Fight,
    Armory,
    Scoreboard,
    Rest,
    Retire,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Fight,
        MenuChoice::Armory,
        MenuChoice::Scoreboard,
        MenuChoice::Rest,
        MenuChoice::Retire,
    ];

    /// Parses a trimmed selection. Anything but "1".."5" is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Fight),
            "2" => Some(MenuChoice::Armory),
            "3" => Some(MenuChoice::Scoreboard),
            "4" => Some(MenuChoice::Rest),
            "5" => Some(MenuChoice::Retire),
            _ => None,
        }
    }

    pub fn key(self) -> u8 {
        match self {
            MenuChoice::Fight => 1,
            MenuChoice::Armory => 2,
            MenuChoice::Scoreboard => 3,
            MenuChoice::Rest => 4,
            MenuChoice::Retire => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Fight => "Fight the next battle",
            MenuChoice::Armory => "Visit the armory",
            MenuChoice::Scoreboard => "View scoreboard",
            MenuChoice::Rest => "Rest (+5 gold, reset streak)",
            MenuChoice::Retire => "Retire",
        }
    }
}
