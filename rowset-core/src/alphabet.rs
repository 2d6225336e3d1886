//! Ordered token alphabets mapping between symbols and positions

/// An ordered, caller-supplied sequence of symbols
///
/// The mapping is positional in both directions: `index_of` answers which
/// position a symbol occupies, and `symbol_at` answers which symbol a
/// position holds. Lookup is a linear scan over the symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// The symbols in positional order
    symbols: Vec<char>,
}

impl Alphabet {
    /// Create a new alphabet from an ordered sequence of symbols
    pub fn new(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    /// Get the number of symbols in this alphabet
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if this alphabet is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the position of a symbol, if present
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Get the symbol at a position, if in range
    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Get the symbols in positional order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Self::new(symbols.chars().collect())
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
