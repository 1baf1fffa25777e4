//! Endless screen sequencing.
//!
//! The slideshow alternates between two phases forever: rendering the current
//! screen, then idling for that screen's post-render delay before advancing.
//! After the last screen it wraps back to the first; there is no terminal
//! state short of process termination.
//!
//! # Fault isolation
//!
//! A fault while rendering one screen is caught here, at the screen boundary,
//! logged with its originating message, and then treated exactly like a
//! normal completion: the inter-screen delay still runs and the next screen
//! still gets its turn. One malformed screen can never halt the device.
//! There is no retry and no backoff; every screen gets exactly one attempt
//! per pass through the list, forever.

use tracing::{error, info};

use crate::render::render_screen;
use crate::screens::Screen;
use crate::surface::TextSurface;
use crate::timing::{Clock, secs};

/// One pass over the screen list: render each screen once, isolating faults,
/// and apply its inter-screen delay.
pub fn run_pass(screens: &[Screen], surface: &mut impl TextSurface, clock: &mut impl Clock) {
    for screen in screens {
        if let Err(fault) = render_screen(surface, clock, screen) {
            error!("error displaying screen: {fault:#}");
        }
        clock.sleep(secs(screen.delay));
    }
}

/// Run the slideshow forever.
///
/// The screen list is loaded by the caller, once, before this is entered; from
/// here on nothing propagates out.
pub fn run(screens: &[Screen], surface: &mut impl TextSurface, clock: &mut impl Clock) -> ! {
    info!(screens = screens.len(), "starting slideshow loop");
    loop {
        run_pass(screens, surface, clock);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
