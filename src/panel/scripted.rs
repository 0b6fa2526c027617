use std::{collections::VecDeque, time::Duration};

use super::{Panel, PanelError};
use crate::game::Symbol;

/// A panel driven by a prepared script instead of a player. Button presses
/// come from a queue, LED masks and delays are recorded, and nothing
/// sleeps. An exhausted script reports `Closed`, which lets tests unwind
/// the driver's forever-loop.
pub struct ScriptedPanel {
    inputs: VecDeque<Symbol>,
    /// Every LED mask set, in order.
    pub shown: Vec<u8>,
    /// Every delay requested, in order.
    pub delays: Vec<Duration>,
}

impl ScriptedPanel {
    pub fn new(inputs: &[Symbol]) -> Self {
        ScriptedPanel {
            inputs: inputs.iter().copied().collect(),
            shown: Vec::new(),
            delays: Vec::new(),
        }
    }
}

impl Panel for ScriptedPanel {
    fn poll_any_input(&mut self) -> Result<Symbol, PanelError> {
        self.inputs.pop_front().ok_or(PanelError::Closed)
    }

    fn wait_for_inputs_clear(&mut self) -> Result<(), PanelError> {
        Ok(())
    }

    fn set_leds(&mut self, mask: u8) -> Result<(), PanelError> {
        self.shown.push(mask);
        Ok(())
    }

    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}
