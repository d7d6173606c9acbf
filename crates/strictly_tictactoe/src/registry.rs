//! Display names for the two players.

use super::Symbol;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Mapping from symbol to display name.
///
/// Names are presentation data only. Renaming never touches the move log,
/// so boards and outcomes are identical before and after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Registry with the default names.
    pub fn new() -> Self {
        Self {
            x: Self::default_name(Symbol::X).to_string(),
            o: Self::default_name(Symbol::O).to_string(),
        }
    }

    /// Registry with explicit names. Blank names fall back to the defaults.
    pub fn with_names(x: &str, o: &str) -> Self {
        Self::new().renamed(Symbol::X, x).renamed(Symbol::O, o)
    }

    /// Name used when none is set.
    pub fn default_name(symbol: Symbol) -> &'static str {
        match symbol {
            Symbol::X => "Player 1",
            Symbol::O => "Player 2",
        }
    }

    /// Display name for a symbol.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Returns a copy with one name replaced.
    ///
    /// Surrounding whitespace is trimmed; a blank name restores the default.
    pub fn renamed(&self, symbol: Symbol, name: &str) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            Self::default_name(symbol).to_string()
        } else {
            trimmed.to_string()
        };

        let mut next = self.clone();
        match symbol {
            Symbol::X => next.x = name,
            Symbol::O => next.o = name,
        }
        next
    }

    /// Iterates `(symbol, name)` pairs, X first.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        Symbol::iter().map(move |symbol| (symbol, self.name(symbol)))
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
