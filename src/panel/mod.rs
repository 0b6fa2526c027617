use std::time::Duration;

use thiserror::Error;

use crate::game::{Sequence, Symbol};
use patterns::{
    ALL_LEDS, CHASE_STEP, CLEANING_LEFT_TO_RIGHT, CLEANING_RIGHT_TO_LEFT, FILLING_LEFT_TO_RIGHT,
    FILLING_RIGHT_TO_LEFT, NO_LEDS, WRONG_LEAD_IN, WRONG_PULSE, WRONG_PULSES,
};

pub mod console;
pub mod patterns;
#[cfg(test)]
pub mod scripted;

/// Defines the blocking I/O surface of an eight-LED, eight-button panel.
///
/// Implementors provide the four primitives; the display and animation
/// choreography is layered on top of them here. All waits block with no
/// timeout: a silent player or a stuck button holds the game indefinitely.
pub trait Panel {
    /// Block until exactly one of the eight buttons is pressed, and return
    /// its symbol.
    fn poll_any_input(&mut self) -> Result<Symbol, PanelError>;

    /// Block until no button is pressed.
    fn wait_for_inputs_clear(&mut self) -> Result<(), PanelError>;

    /// Drive the eight LEDs from a bitmask, bit 0 = leftmost LED.
    fn set_leds(&mut self, mask: u8) -> Result<(), PanelError>;

    /// Block for the given duration.
    fn delay(&mut self, duration: Duration);

    /// Show the target sequence: a leading pause, then each symbol lit for
    /// `interval` followed by an equally long off-gap.
    fn display_sequence(
        &mut self,
        sequence: &Sequence,
        interval: Duration,
    ) -> Result<(), PanelError> {
        self.delay(interval);
        for symbol in sequence.iter() {
            self.set_leds(symbol.mask())?;
            self.delay(interval);
            self.set_leds(NO_LEDS)?;
            self.delay(interval);
        }
        Ok(())
    }

    /// Play a fixed frame table: a leading pause, then each mask held for
    /// `step`.
    fn play_frames(&mut self, frames: &[u8], step: Duration) -> Result<(), PanelError> {
        self.delay(step);
        for &frame in frames {
            self.set_leds(frame)?;
            self.delay(step);
        }
        Ok(())
    }

    /// Game-start choreography: chases filling and cleaning in both
    /// directions.
    fn play_start_animation(&mut self) -> Result<(), PanelError> {
        self.play_frames(&FILLING_LEFT_TO_RIGHT, CHASE_STEP)?;
        self.play_frames(&CLEANING_LEFT_TO_RIGHT, CHASE_STEP)?;
        self.play_frames(&FILLING_RIGHT_TO_LEFT, CHASE_STEP)?;
        self.play_frames(&CLEANING_RIGHT_TO_LEFT, CHASE_STEP)?;
        Ok(())
    }

    /// Correct-answer choreography: one fill-and-clean chase.
    fn play_correct_animation(&mut self) -> Result<(), PanelError> {
        self.play_frames(&FILLING_LEFT_TO_RIGHT, CHASE_STEP)?;
        self.play_frames(&CLEANING_LEFT_TO_RIGHT, CHASE_STEP)?;
        Ok(())
    }

    /// Wrong-answer choreography: three slow all-on/all-off pulses.
    fn play_wrong_animation(&mut self) -> Result<(), PanelError> {
        self.delay(WRONG_LEAD_IN);
        for _ in 0..WRONG_PULSES {
            self.set_leds(ALL_LEDS)?;
            self.delay(WRONG_PULSE);
            self.set_leds(NO_LEDS)?;
            self.delay(WRONG_PULSE);
        }
        Ok(())
    }
}

/// Failure modes for panels.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("input stream closed")]
    Closed,
    #[error("panel i/o failed")]
    Io(#[from] std::io::Error),
}
