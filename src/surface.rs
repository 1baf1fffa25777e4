//! Renderable surface capability and its simulator implementation.
//!
//! The rendering pipeline never draws pixels itself: it asks a [`TextSurface`]
//! to create text elements and append characters to them, one at a time. Each
//! append is the pipeline's only externally observable mutation: on real
//! hardware it triggers a glyph redraw, in the simulator it draws the glyph
//! and refreshes the window.
//!
//! # Element model
//!
//! A text element is an append-only run of characters anchored at a pixel
//! position with a scale and colour. Clearing the surface discards every
//! element and presents a fresh empty group; nothing is ever layered on top
//! of stale content.
//!
//! # Fonts
//!
//! The screen `scale` selects a mono font rather than scaling glyphs:
//! scale 1 is the 6x10 terminal font, scale 2 the 10x20, and anything larger
//! the ProFont 24pt. The character *budget* is always computed from the base
//! 6px cell, so large-scale text can overrun the right margin; oversized
//! output overflows rather than faults, like every other layout overflow in
//! the pipeline.

use anyhow::{Result, anyhow};
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use profont::PROFONT_24_POINT;
use tracing::info;

use crate::colors::{BLACK, rgb565_from_triple};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Handle to one on-surface text element, returned by
/// [`TextSurface::append_text_element`].
pub type TextId = usize;

/// Abstract character-display surface consumed by the rendering pipeline.
pub trait TextSurface {
    /// Surface width in pixels. Read per screen to derive the line budget.
    fn width(&self) -> u32;

    /// Surface height in pixels. The pipeline does not clip against it;
    /// overflowing screens simply run off the visible area.
    fn height(&self) -> u32;

    /// Discard all elements and show a fresh empty group.
    fn clear(&mut self) -> Result<()>;

    /// Create an empty text element at `(x, y)` with the given scale and
    /// RGB-triple colour.
    fn append_text_element(
        &mut self,
        x: i32,
        y: i32,
        scale: u32,
        colour: [u8; 3],
    ) -> Result<TextId>;

    /// Append one character to an existing element.
    fn append_char(&mut self, id: TextId, ch: char) -> Result<()>;
}

// =============================================================================
// Font Selection
// =============================================================================

/// Mono font for a screen's text scale.
fn font_for_scale(scale: u32) -> &'static MonoFont<'static> {
    match scale {
        0 | 1 => &FONT_6X10,
        2 => &FONT_10X20,
        _ => &PROFONT_24_POINT,
    }
}

/// Horizontal advance per character at the given scale, in pixels.
fn char_advance(scale: u32) -> i32 {
    let font = font_for_scale(scale);
    (font.character_size.width + font.character_spacing) as i32
}

// =============================================================================
// Simulator Surface
// =============================================================================

/// One text element on the simulator surface.
struct TextElement {
    x: i32,
    y: i32,
    scale: u32,
    colour: Rgb565,
    chars_drawn: usize,
}

/// [`TextSurface`] over the `embedded-graphics` simulator window.
///
/// Characters are drawn incrementally: an append rasterizes exactly one glyph
/// at the element's next cell and refreshes the window, which is what makes
/// the typing effect visible.
pub struct SimulatorSurface {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    elements: Vec<TextElement>,
}

impl SimulatorSurface {
    /// Open the simulator window at the panel's native 280x240.
    pub fn new() -> Self {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let output_settings = OutputSettingsBuilder::new().scale(2).build();
        let mut window = Window::new("Typing Slideshow", &output_settings);

        // First update creates the window and presents the empty panel
        display.clear(BLACK).ok();
        window.update(&display);

        Self {
            display,
            window,
            elements: Vec::new(),
        }
    }

    /// Drain window events. Closing the window is the simulator's analogue of
    /// pulling power on the device; the slideshow itself has no exit path.
    fn pump_events(&mut self) {
        for event in self.window.events() {
            if matches!(event, SimulatorEvent::Quit) {
                info!("window closed, shutting down");
                std::process::exit(0);
            }
        }
    }
}

impl Default for SimulatorSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface for SimulatorSurface {
    fn width(&self) -> u32 {
        self.display.size().width
    }

    fn height(&self) -> u32 {
        self.display.size().height
    }

    fn clear(&mut self) -> Result<()> {
        self.elements.clear();
        // SimulatorDisplay drawing is infallible
        self.display.clear(BLACK).ok();
        self.window.update(&self.display);
        self.pump_events();
        Ok(())
    }

    fn append_text_element(
        &mut self,
        x: i32,
        y: i32,
        scale: u32,
        colour: [u8; 3],
    ) -> Result<TextId> {
        self.elements.push(TextElement {
            x,
            y,
            scale,
            colour: rgb565_from_triple(colour),
            chars_drawn: 0,
        });
        Ok(self.elements.len() - 1)
    }

    fn append_char(&mut self, id: TextId, ch: char) -> Result<()> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| anyhow!("unknown text element {id}"))?;

        let font = font_for_scale(element.scale);
        let x = element.x + element.chars_drawn as i32 * char_advance(element.scale);
        let style = MonoTextStyle::new(font, element.colour);

        // Stack buffer for the single-glyph string (UTF-8 char max 4 bytes)
        let mut char_buf = [0u8; 4];
        let glyph = ch.encode_utf8(&mut char_buf);
        Text::new(glyph, Point::new(x, element.y), style)
            .draw(&mut self.display)
            .ok();
        element.chars_drawn += 1;

        self.window.update(&self.display);
        self.pump_events();
        Ok(())
    }
}

// =============================================================================
// Recording Surface (test double)
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================
