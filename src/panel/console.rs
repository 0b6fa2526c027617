use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use log::debug;

use super::{Panel, PanelError};
use crate::game::{Symbol, LED_COUNT};

/// An interactive terminal stand-in for the physical panel. The eight
/// buttons are the keys `1` through `8`, read line-buffered from stdin;
/// the eight LEDs render as a row of `●`/`·` redrawn in place on stdout.
#[derive(Debug, Default)]
pub struct ConsolePanel {
    leds: u8,
}

impl ConsolePanel {
    pub fn new() -> Self {
        ConsolePanel { leds: 0 }
    }

    /// Redraw the LED row in place.
    fn render(&mut self) -> Result<(), PanelError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "\r")?;
        for index in 0..LED_COUNT {
            let lit = self.leds & (1 << index) != 0;
            write!(stdout, "{} ", if lit { '●' } else { '·' })?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Read one line from stdin. EOF means the panel is gone.
    fn read_line(&mut self) -> Result<String, PanelError> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(PanelError::Closed);
        }
        Ok(line)
    }

    /// Map a key to a button symbol: `1` is the leftmost button.
    fn parse_key(line: &str) -> Option<Symbol> {
        let trimmed = line.trim();
        if trimmed.chars().count() != 1 {
            return None;
        }
        let digit = trimmed.chars().next()?.to_digit(10)? as usize;
        if digit == 0 {
            return None;
        }
        Symbol::from_index(digit - 1)
    }
}

impl Panel for ConsolePanel {
    fn poll_any_input(&mut self) -> Result<Symbol, PanelError> {
        // Re-prompt until a single valid key arrives, the terminal analog
        // of spinning over the input pins
        loop {
            {
                let mut stdout = io::stdout().lock();
                write!(stdout, "\npress a button (1-{}): ", LED_COUNT)?;
                stdout.flush()?;
            }
            let line = self.read_line()?;
            match ConsolePanel::parse_key(&line) {
                Some(symbol) => {
                    debug!("Button {} pressed", symbol.index() + 1);
                    return Ok(symbol);
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    writeln!(stdout, "buttons are numbered 1-{}", LED_COUNT)?;
                }
            }
        }
    }

    fn wait_for_inputs_clear(&mut self) -> Result<(), PanelError> {
        // Line input is press-and-release in one step, so the buttons are
        // already clear by the time the line arrives
        Ok(())
    }

    fn set_leds(&mut self, mask: u8) -> Result<(), PanelError> {
        self.leds = mask;
        self.render()
    }

    fn delay(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
