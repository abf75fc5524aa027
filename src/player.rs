use std::fmt;

use crate::{board::Symbol, Error};

/// A participant. Name and symbol are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Result<Player, Error> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Player { name, symbol })
    }

    /// Like [`Player::new`], with the symbol given as text (`"X"` or `"O"`).
    /// The name is checked before the symbol.
    pub fn parse(name: impl Into<String>, symbol: &str) -> Result<Player, Error> {
        let name = name.into();
        validate_name(&name)?;
        let symbol = symbol.parse::<Symbol>()?;
        Ok(Player { name, symbol })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Names must be non-empty and free of control characters. Letters, digits,
/// spaces, punctuation and other printable symbols are all accepted.
pub fn validate_name(name: &str) -> Result<(), Error> {
    if name.is_empty() || name.chars().any(char::is_control) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}
