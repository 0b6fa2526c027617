use log::info;
use rand::Rng;

use crate::{
    game::{verify, Game, Sequence},
    panel::{
        patterns::{NO_LEDS, SHOW_INTERVAL},
        Panel, PanelError,
    },
};


/// Runs the game loop against a panel: wait for a starting press, grow the
/// target, display it, collect the replay, verify, transition.
pub struct GameDriver<P: Panel, R: Rng> {
    /// The game itself.
    pub game: Game,
    /// The panel the game is played on.
    pub panel: P,
    /// Source of the random symbols appended each round.
    pub rng: R,
}

impl<P: Panel, R: Rng> GameDriver<P, R> {
    pub fn new(panel: P, rng: R) -> Self {
        GameDriver {
            game: Game::new(),
            panel,
            rng,
        }
    }

    /// Play rounds forever. Only a panel failure breaks the loop; game
    /// logic has no failure path.
    pub fn play(&mut self) -> Result<(), PanelError> {
        loop {
            self.play_round()?;
        }
    }

    fn play_round(&mut self) -> Result<(), PanelError> {
        if !self.game.state.started {
            // Any one press starts the game
            self.panel.poll_any_input()?;
            self.panel.wait_for_inputs_clear()?;
            self.game.state.start();
            self.panel.play_start_animation()?;
            info!("Game started");
        }

        let target = self.game.next_target(&mut self.rng);
        info!("Round {}: showing the target", self.game.state.step);
        self.panel.display_sequence(&target, SHOW_INTERVAL)?;

        let replay = self.collect_replay(target.len())?;
        let correct = verify(&replay, &target);
        // The answer key carried into the next round is always the
        // generated target, never the player's replay
        self.game.state.record_answer(target);

        if correct {
            info!("Round {} cleared", self.game.state.step);
            self.panel.play_correct_animation()?;
            self.game.state.advance();
        } else {
            info!("Wrong replay at round {}, game over", self.game.state.step);
            self.panel.play_wrong_animation()?;
            self.game.state.reset();
        }
        Ok(())
    }

    /// Read `length` presses, echoing each on the LEDs until released.
    fn collect_replay(&mut self, length: usize) -> Result<Sequence, PanelError> {
        let mut replay = Sequence::new();
        for _ in 0..length {
            let symbol = self.panel.poll_any_input()?;
            replay.push(symbol);
            self.panel.set_leds(symbol.mask())?;
            self.panel.wait_for_inputs_clear()?;
            self.panel.set_leds(NO_LEDS)?;
        }
        Ok(replay)
    }
}
