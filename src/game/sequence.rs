use rand::prelude::*;
use strum::{EnumIter, IntoEnumIterator};

/// Number of LEDs (and buttons) on the panel.
pub const LED_COUNT: usize = 8;

/// Longest sequence the game will grow to.
pub const MAX_GAME_STEPS: usize = 20;

/// One of the eight LED/button identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Symbol {
    Led1,
    Led2,
    Led3,
    Led4,
    Led5,
    Led6,
    Led7,
    Led8,
}

impl Symbol {
    /// The LED index, 0 through 7.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-bit flag for this symbol, suitable for ORing onto an 8-bit LED port.
    pub fn mask(self) -> u8 {
        1 << self.index()
    }

    /// The symbol at the given LED index, if it is in range.
    pub fn from_index(index: usize) -> Option<Symbol> {
        Symbol::iter().nth(index)
    }

    /// Choose one of the eight symbols uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Symbol {
        Symbol::iter().choose(rng).unwrap()
    }
}

/// An ordered, fixed-capacity list of symbols: either a machine-generated
/// target or the player's replay. Entries beyond `len` are don't-care.
#[derive(Debug, Clone, Copy)]
pub struct Sequence {
    entries: [Symbol; MAX_GAME_STEPS],
    len: usize,
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence {
            entries: [Symbol::Led1; MAX_GAME_STEPS],
            len: 0,
        }
    }
}

impl Sequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Sequence::default()
    }

    /// Number of valid entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a symbol. Growing past `MAX_GAME_STEPS` is a contract
    /// violation, not a game event, and fails fast.
    pub fn push(&mut self, symbol: Symbol) {
        assert!(self.len < MAX_GAME_STEPS, "sequence capacity exceeded");
        self.entries[self.len] = symbol;
        self.len += 1;
    }

    /// The symbol at `index`, or `None` past the valid prefix.
    pub fn get(&self, index: usize) -> Option<Symbol> {
        if index < self.len {
            Some(self.entries[index])
        } else {
            None
        }
    }

    /// Iterate over the valid entries in order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries[..self.len].iter().copied()
    }

    /// Shorten the sequence to `len` entries. No-op if it is already that
    /// short.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Construct a sequence from a slice of symbols.
    #[cfg(test)]
    pub fn from_slice(symbols: &[Symbol]) -> Self {
        let mut sequence = Sequence::new();
        for &symbol in symbols {
            sequence.push(symbol);
        }
        sequence
    }
}

/// Order-sensitive equality over the valid prefix only.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Sequence {}
