//! Endless typing-effect slideshow for small ST7789 displays (simulator mode).
//!
//! Loads a list of screens from `screens.json` once at startup, then loops
//! over them forever: each screen's three-column lines are word-wrapped to
//! the panel's character budget, merged into padded full-width rows, and
//! revealed character by character with case-dependent pacing. A fault while
//! rendering one screen is logged and skipped; the loop never stops.
//!
//! # Architecture
//!
//! ```text
//! scheduler ──► render ──► layout ──► wrap
//!     │            │
//!     │            └─────► typing ──► surface (simulator window)
//!     └─ per-screen fault isolation + inter-screen delay
//! ```
//!
//! Only the screen-list load and display bring-up can fail fatally; both
//! happen before the loop is entered.

mod colors;
mod config;
mod layout;
mod render;
mod scheduler;
mod screens;
mod surface;
mod timing;
mod typing;
mod wrap;

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::SCREENS_PATH;
use crate::screens::load_screens;
use crate::surface::{SimulatorSurface, TextSurface};
use crate::timing::WallClock;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // All-or-nothing: without a screen list there is nothing to display
    let screens = load_screens(Path::new(SCREENS_PATH))?;
    info!(count = screens.len(), path = SCREENS_PATH, "loaded screen list");

    let mut surface = SimulatorSurface::new();
    info!(
        width = surface.width(),
        height = surface.height(),
        "display initialised"
    );

    scheduler::run(&screens, &mut surface, &mut WallClock)
}
