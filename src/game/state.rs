use super::{Sequence, MAX_GAME_STEPS};

/// Game state.
#[derive(Debug, PartialEq, Eq)]
pub struct GameState {
    /// A game is in progress.
    pub started: bool,
    /// Current round number, which equals the target sequence length for
    /// this round. Stays in `[1, MAX_GAME_STEPS]`.
    pub step: usize,
    /// The target sequence generated for the previous round. Always the
    /// machine's canonical answer, never a player-submitted one.
    pub current_answer: Sequence,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            started: false,
            step: 1,
            current_answer: Sequence::new(),
        }
    }
}

impl GameState {
    /// Begin a new game at round 1.
    pub fn start(&mut self) {
        self.started = true;
        self.step = 1;
        self.current_answer.clear();
    }

    /// Move to the next round after a correct replay. No-op once the step
    /// cap is reached; the sequence stops growing.
    pub fn advance(&mut self) {
        if self.step == MAX_GAME_STEPS {
            return;
        }
        self.step += 1;
    }

    /// Return to the idle state. The only recovery path after a wrong
    /// replay.
    pub fn reset(&mut self) {
        *self = GameState::default();
    }

    /// Carry this round's generated target forward as the answer key.
    pub fn record_answer(&mut self, answer: Sequence) {
        self.current_answer = answer;
    }
}
