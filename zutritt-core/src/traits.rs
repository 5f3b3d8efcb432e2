//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Eindraht-Übertragung zur LED-Matrix (WS2812/Neopixel)
///
/// # Implementierungen
/// - **Production:** RmtLedTransport (ESP32 RMT Peripheral)
/// - **Testing:** MockLedTransport (zeichnet Bytes auf)
pub trait LedTransport {
    /// Sendet ein Byte und blockiert, bis die Hardware es angenommen hat
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn put_blocking(&mut self, byte: u8) -> Result<(), LedError>;
}

/// Analoger Eingang mit umschaltbarem Kanal (Joystick-Achse)
pub trait AnalogChannel {
    /// Wählt den Eingangskanal des Wandlers
    fn select_channel(&mut self, channel: u8);

    /// Liest den Rohwert (0..=4095)
    fn read_raw(&mut self) -> u16;
}

/// Status-Display für das Menü
///
/// Der Core zeichnet nur Text und ein leeres Rechteck (Auswahlrahmen).
pub trait MenuDisplay {
    fn clear(&mut self);

    /// Text mit linker oberer Ecke bei (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u8);

    /// Leeres Rechteck mit den Ecken (x1, y1) und (x2, y2)
    fn draw_empty_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Überträgt den Display-Puffer
    fn show(&mut self);
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
