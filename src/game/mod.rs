use rand::prelude::*;

pub use sequence::{Sequence, Symbol, LED_COUNT, MAX_GAME_STEPS};
pub use state::GameState;

mod sequence;
mod state;
#[cfg(test)]
mod tests;

/// An instance of the memory game.
#[derive(Debug, Default)]
pub struct Game {
    /// Game state.
    pub state: GameState,
}

impl Game {
    /// A fresh game, waiting for a first press to start.
    pub fn new() -> Self {
        Game {
            state: GameState::default(),
        }
    }

    /// Build this round's target: the carried answer with one freshly
    /// chosen random symbol written at `step - 1`, so the target's length
    /// equals the round number. Below the cap the carried answer has
    /// `step - 1` entries and the new symbol extends it; at the step cap
    /// it already has `step` entries and the final symbol is replaced
    /// instead, so plateau rounds never grow the sequence.
    pub fn next_target<R: Rng>(&self, rng: &mut R) -> Sequence {
        let mut target = self.state.current_answer;
        target.truncate(self.state.step - 1);
        target.push(Symbol::random(rng));
        debug_assert_eq!(target.len(), self.state.step);
        target
    }
}

/// Exact-order comparison of a replay against the target. Any size
/// mismatch or positional mismatch is false; there is no partial credit.
pub fn verify(user: &Sequence, target: &Sequence) -> bool {
    user == target
}
