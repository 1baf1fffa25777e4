//! Per-screen rendering orchestration.
//!
//! Rendering one screen always starts from a clean surface: the previous
//! screen's elements are discarded, never layered under new ones, so a failed
//! screen cannot leave stale state behind for the next. The character budget
//! is recomputed from the surface's current width on every screen rather than
//! cached.
//!
//! The vertical cursor starts at the top margin and only ever advances: one
//! line step per typed row, across wrapped rows and source lines alike. A
//! screen with more rows than the panel has pixels simply runs off the bottom;
//! clipping is the surface's concern, not the pipeline's.
//!
//! Post-line pauses resolve in precedence order: a line's explicit fourth
//! element wins over the screen's `line_delays` entry for that index; with
//! neither, only the per-character pacing applies.

use anyhow::Result;
use tracing::debug;

use crate::config::{CHAR_WIDTH, LEFT_MARGIN, RIGHT_MARGIN, TOP_MARGIN};
use crate::layout::compose_rows;
use crate::screens::Screen;
use crate::surface::TextSurface;
use crate::timing::{Clock, secs};
use crate::typing::type_line;

/// Render all lines of one screen with the typing effect.
///
/// Runs to completion or returns the first fault; the caller decides whether
/// a fault is fatal.
pub fn render_screen(
    surface: &mut impl TextSurface,
    clock: &mut impl Clock,
    screen: &Screen,
) -> Result<()> {
    surface.clear()?;

    let max_chars =
        (surface.width().saturating_sub(LEFT_MARGIN + RIGHT_MARGIN) / CHAR_WIDTH) as usize;
    let upper_delay = secs(screen.upper_delay);
    let lower_delay = secs(screen.lower_delay);
    let mut y = TOP_MARGIN;

    for (idx, line) in screen.lines.iter().enumerate() {
        debug!(
            line = idx,
            left = %line.left,
            centre = %line.centre,
            right = %line.right,
            "typing line"
        );

        for row in compose_rows(&line.left, &line.centre, &line.right, max_chars) {
            y = type_line(
                surface,
                clock,
                &row,
                LEFT_MARGIN as i32,
                y,
                screen.scale,
                screen.colour,
                upper_delay,
                lower_delay,
            )?;
        }

        if let Some(delay) = line.delay {
            clock.sleep(secs(delay));
        } else if let Some(delay) = screen.line_delays.get(&idx) {
            clock.sleep(secs(*delay));
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
