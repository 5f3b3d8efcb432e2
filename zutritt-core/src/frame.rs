//! LED-Frame-Puffer
//!
//! Pixel werden zuerst im Puffer gesetzt und erst mit `flush()` übertragen.
//! So erscheinen mehrere zusammengehörige Änderungen als ein Bild.

use rgb::RGB8;

use crate::config::{LED_COUNT, OFF};
use crate::traits::{LedError, LedTransport};
use crate::types::LedIndex;

/// Farbwerte aller LEDs, Index = physische Position
///
/// Der Puffer bleibt nach `flush()` erhalten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedFrame {
    pixels: [RGB8; LED_COUNT],
}

impl LedFrame {
    pub const fn new() -> Self {
        Self {
            pixels: [OFF; LED_COUNT],
        }
    }

    pub fn set_pixel(&mut self, index: LedIndex, color: RGB8) {
        self.pixels[index.get()] = color;
    }

    pub fn pixel(&self, index: LedIndex) -> RGB8 {
        self.pixels[index.get()]
    }

    pub fn clear(&mut self) {
        self.pixels = [OFF; LED_COUNT];
    }

    /// Überträgt den Puffer: pro LED grün, rot, blau, LED 0 zuerst
    ///
    /// Bricht beim ersten Fehler ab. Die Matrix zeigt dann ein
    /// unvollständiges Bild bis zum nächsten erfolgreichen `flush()`.
    pub fn flush<T: LedTransport>(&self, transport: &mut T) -> Result<(), LedError> {
        for pixel in &self.pixels {
            transport.put_blocking(pixel.g)?;
            transport.put_blocking(pixel.r)?;
            transport.put_blocking(pixel.b)?;
        }
        Ok(())
    }
}

impl Default for LedFrame {
    fn default() -> Self {
        Self::new()
    }
}
