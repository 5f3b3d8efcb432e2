//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::config::{ADC_MAX, BAR_WIDTH, GREEN, RED};

/// Skaliert einen ADC-Rohwert auf die Bucket-Skala (0..=40)
///
/// Ganzzahlig wie auf dem Controller: 4095 ergibt genau `BAR_WIDTH`.
///
/// # Beispiele
///
/// ```
/// # use zutritt_core::bucketize;
/// assert_eq!(bucketize(0), 0);
/// assert_eq!(bucketize(2048), 20); // Ruhelage
/// assert_eq!(bucketize(4095), 40);
/// ```
pub fn bucketize(raw: u16) -> u32 {
    u32::from(raw.min(ADC_MAX)) * BAR_WIDTH / u32::from(ADC_MAX)
}

/// Zugriffsregel: `¬PT ∨ (GR ∧ HO ∧ DI)`
///
/// Reihenfolge wie am Gerät: ohne Portier-Sperre ist der Ausgang frei,
/// sonst nur wenn alle drei übrigen Bedingungen erfüllt sind.
pub fn access_granted(
    gesture_recognized: bool,
    allowed_hour: bool,
    allowed_day: bool,
    doorman_override: bool,
) -> bool {
    if !doorman_override {
        true
    } else {
        gesture_recognized && allowed_hour && allowed_day
    }
}

/// Farbe einer Status-LED: grün für wahr, rot für falsch
pub fn status_color(value: bool) -> RGB8 {
    if value { GREEN } else { RED }
}
