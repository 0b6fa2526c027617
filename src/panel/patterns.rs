//! LED mask tables and timing constants for the fixed choreography.

use std::time::Duration;

/// All eight LEDs off.
pub const NO_LEDS: u8 = 0b0000_0000;
/// All eight LEDs on.
pub const ALL_LEDS: u8 = 0b1111_1111;

/// Frame time for the chase animations.
pub const CHASE_STEP: Duration = Duration::from_millis(25);
/// On-time and off-gap when showing the target sequence.
pub const SHOW_INTERVAL: Duration = Duration::from_millis(1000);
/// Pause before the wrong-answer flashing begins.
pub const WRONG_LEAD_IN: Duration = Duration::from_millis(100);
/// On-time and off-time of each wrong-answer pulse.
pub const WRONG_PULSE: Duration = Duration::from_millis(300);
/// Number of all-on/all-off pulses in the wrong-answer animation.
pub const WRONG_PULSES: usize = 3;

pub const FILLING_LEFT_TO_RIGHT: [u8; 9] = [
    0b0000_0000,
    0b0000_0001,
    0b0000_0011,
    0b0000_0111,
    0b0000_1111,
    0b0001_1111,
    0b0011_1111,
    0b0111_1111,
    0b1111_1111,
];

pub const CLEANING_LEFT_TO_RIGHT: [u8; 9] = [
    0b1111_1111,
    0b1111_1110,
    0b1111_1100,
    0b1111_1000,
    0b1111_0000,
    0b1110_0000,
    0b1100_0000,
    0b1000_0000,
    0b0000_0000,
];

pub const FILLING_RIGHT_TO_LEFT: [u8; 9] = [
    0b0000_0000,
    0b1000_0000,
    0b1100_0000,
    0b1110_0000,
    0b1111_0000,
    0b1111_1000,
    0b1111_1100,
    0b1111_1110,
    0b1111_1111,
];

pub const CLEANING_RIGHT_TO_LEFT: [u8; 9] = [
    0b1111_1111,
    0b0111_1111,
    0b0011_1111,
    0b0001_1111,
    0b0000_1111,
    0b0000_0111,
    0b0000_0011,
    0b0000_0001,
    0b0000_0000,
];
