//! Screen list data model and JSON loading.
//!
//! A screen is one slide: its lines, text scale and colour, and the timing
//! overrides that shape the typing effect. The list is read from a JSON file
//! exactly once at startup and reused for every pass of the slideshow; a load
//! failure there is fatal, there is nothing sensible to display without it.
//!
//! # Schema
//!
//! ```json
//! [
//!   {
//!     "lines": [
//!       ["left", "centre", "right"],
//!       ["left", "centre", "right", 2.5]
//!     ],
//!     "scale": 1,
//!     "colour": [0, 255, 255],
//!     "upper_delay": 0.005,
//!     "lower_delay": 0.25,
//!     "line_delays": { "0": 1.0 },
//!     "delay": 4
//!   }
//! ]
//! ```
//!
//! Every field except `lines` is optional and falls back to the defaults in
//! [`crate::config`]. A line's optional fourth element is a post-line delay in
//! seconds that takes precedence over any `line_delays` entry for its index.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::{
    DEFAULT_LOWER_DELAY, DEFAULT_SCALE, DEFAULT_SCREEN_DELAY, DEFAULT_TEXT_COLOUR,
    DEFAULT_UPPER_DELAY,
};

// =============================================================================
// Data Model
// =============================================================================

/// One slide: content plus display-timing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Screen {
    /// Source lines, rendered in order.
    pub lines: Vec<Line>,

    /// Text scale, selects the font size.
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Text colour as an 8-bit RGB triple.
    #[serde(default = "default_colour")]
    pub colour: [u8; 3],

    /// Per-character delay for uppercase letters, seconds.
    #[serde(default = "default_upper_delay")]
    pub upper_delay: f32,

    /// Per-character delay for lowercase letters, seconds.
    #[serde(default = "default_lower_delay")]
    pub lower_delay: f32,

    /// Post-line delays keyed by zero-based line index, seconds.
    /// JSON object keys are decimal strings; serde_json parses them to usize.
    #[serde(default)]
    pub line_delays: HashMap<usize, f32>,

    /// Pause after the whole screen, seconds.
    #[serde(default = "default_screen_delay")]
    pub delay: f32,
}

/// One row of unwrapped three-column text, with an optional post-line delay.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "LineRepr")]
pub struct Line {
    pub left: String,
    pub centre: String,
    pub right: String,
    /// Explicit post-line delay in seconds. Overrides `line_delays`.
    pub delay: Option<f32>,
}

/// Wire shape of a line: a 3- or 4-element JSON array.
#[derive(Deserialize)]
#[serde(untagged)]
enum LineRepr {
    Plain(String, String, String),
    Delayed(String, String, String, f32),
}

impl From<LineRepr> for Line {
    fn from(repr: LineRepr) -> Self {
        match repr {
            LineRepr::Plain(left, centre, right) => Self {
                left,
                centre,
                right,
                delay: None,
            },
            LineRepr::Delayed(left, centre, right, delay) => Self {
                left,
                centre,
                right,
                delay: Some(delay),
            },
        }
    }
}

fn default_scale() -> u32 {
    DEFAULT_SCALE
}

fn default_colour() -> [u8; 3] {
    DEFAULT_TEXT_COLOUR
}

fn default_upper_delay() -> f32 {
    DEFAULT_UPPER_DELAY
}

fn default_lower_delay() -> f32 {
    DEFAULT_LOWER_DELAY
}

fn default_screen_delay() -> f32 {
    DEFAULT_SCREEN_DELAY
}

// =============================================================================
// Loading
// =============================================================================

/// Load the screen list from a JSON file.
///
/// All-or-nothing: any read or parse failure fails the whole load.
pub fn load_screens(path: &Path) -> Result<Vec<Screen>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read screen list from {}", path.display()))?;
    let screens: Vec<Screen> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse screen list in {}", path.display()))?;
    Ok(screens)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    // -------------------------------------------------------------------------
    // Line Deserialization Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_line_from_three_element_array() {
        let line: Line = serde_json::from_str(r#"["l", "c", "r"]"#).unwrap();
        assert_eq!(line.left, "l");
        assert_eq!(line.centre, "c");
        assert_eq!(line.right, "r");
        assert_eq!(line.delay, None);
    }

    #[test]
    fn test_line_from_four_element_array() {
        let line: Line = serde_json::from_str(r#"["l", "c", "r", 2.5]"#).unwrap();
        assert_eq!(line.delay, Some(2.5));
    }

    #[test]
    fn test_line_rejects_other_shapes() {
        assert!(serde_json::from_str::<Line>(r#"["l", "c"]"#).is_err());
        assert!(serde_json::from_str::<Line>(r#"["l", "c", "r", 1.0, 2.0]"#).is_err());
        assert!(serde_json::from_str::<Line>(r#"[1, 2, 3]"#).is_err());
    }

    // -------------------------------------------------------------------------
    // Screen Deserialization Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_screen_defaults_apply_when_fields_omitted() {
        let screen: Screen = serde_json::from_str(r#"{ "lines": [["a", "", ""]] }"#).unwrap();
        assert_eq!(screen.scale, DEFAULT_SCALE);
        assert_eq!(screen.colour, DEFAULT_TEXT_COLOUR);
        assert_eq!(screen.upper_delay, DEFAULT_UPPER_DELAY);
        assert_eq!(screen.lower_delay, DEFAULT_LOWER_DELAY);
        assert_eq!(screen.delay, DEFAULT_SCREEN_DELAY);
        assert!(screen.line_delays.is_empty());
    }

    #[test]
    fn test_screen_explicit_fields_override_defaults() {
        let screen: Screen = serde_json::from_str(
            r#"{
                "lines": [["a", "b", "c", 1.5]],
                "scale": 2,
                "colour": [255, 0, 0],
                "upper_delay": 0.01,
                "lower_delay": 0.1,
                "line_delays": { "0": 3.0, "4": 0.5 },
                "delay": 7
            }"#,
        )
        .unwrap();

        assert_eq!(screen.scale, 2);
        assert_eq!(screen.colour, [255, 0, 0]);
        assert_eq!(screen.upper_delay, 0.01);
        assert_eq!(screen.lower_delay, 0.1);
        assert_eq!(screen.delay, 7.0);
        // String keys in the JSON object parse to usize indices
        assert_eq!(screen.line_delays.get(&0), Some(&3.0));
        assert_eq!(screen.line_delays.get(&4), Some(&0.5));
        assert_eq!(screen.lines[0].delay, Some(1.5));
    }

    #[test]
    fn test_screen_requires_lines() {
        assert!(serde_json::from_str::<Screen>(r#"{ "delay": 4 }"#).is_err());
    }

    #[test]
    fn test_bundled_screen_list_parses() {
        let screens: Vec<Screen> = serde_json::from_str(include_str!("../screens.json"))
            .expect("bundled screens.json should parse");
        assert!(!screens.is_empty(), "bundled screen list should not be empty");
    }

    // -------------------------------------------------------------------------
    // Loading Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_load_screens_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "lines": [["HELLO", "", ""], ["", "WORLD", "", 2.0]], "delay": 1 }}]"#
        )
        .unwrap();

        let screens = load_screens(file.path()).unwrap();
        assert_eq!(screens.len(), 1);
        assert_eq!(screens[0].lines.len(), 2);
        assert_eq!(screens[0].lines[1].delay, Some(2.0));
    }

    #[test]
    fn test_load_screens_missing_file_is_error() {
        let result = load_screens(Path::new("/nonexistent/screens.json"));
        assert!(result.is_err(), "missing screen list should be a fatal error");
    }

    #[test]
    fn test_load_screens_invalid_json_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        assert!(load_screens(file.path()).is_err());
    }
}
