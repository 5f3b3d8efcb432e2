//! Verhaltens-Konstanten
//!
//! Alle Schwellwerte und Zeiten sind exakt, nicht ungefähr: das Menü
//! reagiert auf die genauen Bucket-Grenzen.

use rgb::RGB8;

use crate::types::LedIndex;

// ============================================================================
// LED-Matrix
// ============================================================================

/// Anzahl der LEDs in der Matrix (5x5)
pub const LED_COUNT: usize = 25;

/// LED für das Ausgangssignal (Mitte der Matrix)
pub const OUTPUT_LED: LedIndex = LedIndex::from_const(12);

/// Farbe für "wahr" bzw. "freigegeben"
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };

/// Farbe für "falsch" bzw. "gesperrt"
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

/// LED aus
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

// ============================================================================
// Joystick (Analog-Achse)
// ============================================================================

/// Höchster Rohwert des 12-Bit ADC
pub const ADC_MAX: u16 = (1 << 12) - 1;

/// Anzahl der Buckets, auf die der Rohwert skaliert wird
pub const BAR_WIDTH: u32 = 40;

/// Unterhalb dieses Buckets: Cursor nach unten
pub const LOW_THRESHOLD: u32 = 10;

/// Oberhalb dieses Buckets: Cursor nach oben
/// 10..=30 ist die Totzone um die Ruhelage (~20)
pub const HIGH_THRESHOLD: u32 = 30;

// ============================================================================
// Menü
// ============================================================================

/// Zeilen-Offsets der vier Menü-Einträge auf dem Display
pub const MENU_STOPS: [i32; 4] = [12, 20, 28, 36];

/// Abstand zwischen zwei Menü-Zeilen
pub const MENU_STEP: i32 = 8;

/// Maximale Schritte in eine Richtung (4 Einträge → 3 Schritte)
pub const MAX_MOVES: u8 = 3;

// ============================================================================
// Timing
// ============================================================================

/// Einschwingzeit nach Kanalwahl des ADC (Hardware-Vorgabe)
pub const AXIS_SETTLE_US: u32 = 2;

/// Wartezeit zwischen den beiden Lesevorgängen des Tasters
pub const DEBOUNCE_MS: u32 = 20;

/// Pause pro Schleifendurchlauf (Flimmern + Joystick-Entprellung)
pub const LOOP_INTERVAL_MS: u32 = 150;
