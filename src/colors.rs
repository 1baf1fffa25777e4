//! Color constants and conversions for the slideshow display.
//!
//! Screen records carry colours as 8-bit RGB triples (the JSON schema), while
//! the ST7789 and its simulator are native Rgb565. The conversion goes through
//! `embedded_graphics`' `Rgb888` so component scaling is handled by the crate
//! rather than by hand-rolled bit shifts.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

/// Pure black. Used as the background for every cleared surface.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Convert an 8-bit RGB triple from a screen record into the display's
/// native Rgb565.
pub fn rgb565_from_triple(colour: [u8; 3]) -> Rgb565 {
    Rgb888::new(colour[0], colour[1], colour[2]).into()
}
