// SSD1306 OLED Display für das Menü
//
// Zeichenfehler werden ignoriert: das Display ist reine Anzeige, die
// Zugriffslogik läuft auch ohne.

use defmt::warn;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use zutritt_core::MenuDisplay;

use crate::config::DISPLAY_I2C_ADDRESS;

/// Konkreter Display-Treiber, generisch über das I2C-Peripheral
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct OledMenuDisplay<I2C> {
    display: Display<I2C>,
}

impl<I2C> OledMenuDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialisiert das Display und löscht den Bildschirm
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        if display.init().is_err() {
            warn!("Display: Initialisierung fehlgeschlagen");
        }
        display.clear_buffer();
        let _ = display.flush();

        Self { display }
    }
}

/// Schriftgröße 1 = 6x10, alles darüber = 10x20
fn text_style(scale: u8) -> MonoTextStyle<'static, BinaryColor> {
    let font = if scale <= 1 { &FONT_6X10 } else { &FONT_10X20 };
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> MenuDisplay for OledMenuDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u8) {
        let _ = Text::with_baseline(text, Point::new(x, y), text_style(scale), Baseline::Top)
            .draw(&mut self.display);
    }

    fn draw_empty_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let _ = Rectangle::with_corners(Point::new(x1, y1), Point::new(x2, y2))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.display);
    }

    fn show(&mut self) {
        let _ = self.display.flush();
    }
}
