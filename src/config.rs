//! Application configuration constants.
//!
//! All layout arithmetic in the rendering pipeline derives from the character
//! cell and margin constants below. The character budget per line is computed
//! at render time from the surface's pixel width:
//!
//! ```ignore
//! let max_chars = (surface.width() - LEFT_MARGIN - RIGHT_MARGIN) / CHAR_WIDTH;
//! ```
//!
//! It is recomputed for every screen rather than cached, so a surface with
//! different geometry gets a correct budget without restart.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 1.69" panel: 280x240).
pub const SCREEN_WIDTH: u32 = 280;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Text Layout Configuration
// =============================================================================

/// Left margin in pixels. Text elements start at this x position.
pub const LEFT_MARGIN: u32 = 10;

/// Right margin in pixels, reserved out of the character budget.
pub const RIGHT_MARGIN: u32 = 10;

/// Top margin in pixels. The first line of every screen starts here.
pub const TOP_MARGIN: i32 = 20;

/// Width of one character cell in pixels at the base font scale.
/// The per-line character budget divides by this value.
pub const CHAR_WIDTH: u32 = 6;

/// Vertical advance between lines in pixels.
pub const LINE_HEIGHT: i32 = 15;

/// Default text scale when a screen record omits one.
pub const DEFAULT_SCALE: u32 = 1;

/// Default text colour (cyan) when a screen record omits one, RGB triple.
pub const DEFAULT_TEXT_COLOUR: [u8; 3] = [0, 255, 255];

// =============================================================================
// Timing Configuration
// =============================================================================

/// Delay after typing a digit, punctuation, or space character.
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(25);

/// Delay after typing a lowercase character, when the screen omits
/// `lower_delay`. Seconds, matching the JSON schema unit.
pub const DEFAULT_LOWER_DELAY: f32 = 0.25;

/// Delay after typing an uppercase character, when the screen omits
/// `upper_delay`. Seconds, matching the JSON schema unit.
pub const DEFAULT_UPPER_DELAY: f32 = 0.005;

/// Pause after a finished screen, when the screen omits `delay`. Seconds.
pub const DEFAULT_SCREEN_DELAY: f32 = 4.0;

// =============================================================================
// Screen Source
// =============================================================================

/// Path of the screen list, read once at startup.
pub const SCREENS_PATH: &str = "./screens.json";
