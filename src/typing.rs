//! Character-by-character typing animation.
//!
//! Reveals one assembled row of text on a surface the way a teletype would:
//! an empty text element is appended at the row's position, then characters
//! are pushed onto it one at a time with a pause between each. The pause
//! depends on the character class: lowercase and uppercase letters use the
//! screen's configured delays, everything else (digits, punctuation, spaces)
//! uses a fixed default. The mismatch is what gives mixed-case text its
//! uneven, human cadence.

use std::time::Duration;

use anyhow::Result;

use crate::config::{DEFAULT_CHAR_DELAY, LINE_HEIGHT};
use crate::surface::TextSurface;
use crate::timing::Clock;

/// Pause after typing `ch`.
///
/// Character classes follow Unicode case, so accented letters pace like
/// letters rather than punctuation.
pub fn char_delay(ch: char, upper_delay: Duration, lower_delay: Duration) -> Duration {
    if ch.is_lowercase() {
        lower_delay
    } else if ch.is_uppercase() {
        upper_delay
    } else {
        DEFAULT_CHAR_DELAY
    }
}

/// Type one row of text onto `surface` at `(x, y)`.
///
/// Appends a fresh empty element, then one character at a time in input
/// order, suspending on `clock` after each. Returns the next row's vertical
/// position, `y + LINE_HEIGHT`.
#[allow(clippy::too_many_arguments)]
pub fn type_line(
    surface: &mut impl TextSurface,
    clock: &mut impl Clock,
    text: &str,
    x: i32,
    y: i32,
    scale: u32,
    colour: [u8; 3],
    upper_delay: Duration,
    lower_delay: Duration,
) -> Result<i32> {
    let element = surface.append_text_element(x, y, scale, colour)?;

    for ch in text.chars() {
        surface.append_char(element, ch)?;
        clock.sleep(char_delay(ch, upper_delay, lower_delay));
    }

    Ok(y + LINE_HEIGHT)
}

// =============================================================================
// Unit Tests
// =============================================================================
