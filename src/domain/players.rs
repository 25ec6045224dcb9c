//! Player metadata entered on the setup screen.

/// One player's entered details, kept as free text the way the ledger
/// stores them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub elo: String,
}

impl PlayerEntry {
    /// Build an entry from raw field text, trimming surrounding whitespace.
    pub fn from_input(name: &str, elo: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            elo: elo.trim().to_string(),
        }
    }

    /// The name must be 1-20 characters and the rating an all-digit string
    /// whose value is between 1 and 5000.
    pub fn is_valid(&self) -> bool {
        valid_name(&self.name) && valid_elo(&self.elo)
    }

    /// Banner text shown in the board window's margins.
    pub fn banner(&self) -> String {
        format!("{}({})", self.name, self.elo)
    }
}

/// Both sides' details; a game only starts when both validate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Players {
    pub white: PlayerEntry,
    pub black: PlayerEntry,
}

impl Players {
    pub fn is_valid(&self) -> bool {
        self.white.is_valid() && self.black.is_valid()
    }
}

fn valid_name(name: &str) -> bool {
    (1..=20).contains(&name.chars().count())
}

fn valid_elo(elo: &str) -> bool {
    !elo.is_empty()
        && elo.chars().all(|c| c.is_ascii_digit())
        && elo.parse::<u32>().is_ok_and(|v| (1..=5000).contains(&v))
}
