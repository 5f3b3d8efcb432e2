//! Core Types für die Zutrittskontrolle
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::access::Condition;
use crate::config::LED_COUNT;

/// Position einer LED in der Matrix (immer `< LED_COUNT`)
///
/// Ungültige Indizes lassen sich nicht konstruieren, daher braucht
/// `LedFrame::set_pixel` keine Fehlerbehandlung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LedIndex(usize);

impl LedIndex {
    /// Prüft den Index gegen `LED_COUNT`
    pub const fn new(index: usize) -> Option<Self> {
        if index < LED_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Für Konstanten: ein ungültiger Index bricht bereits den Build ab
    pub(crate) const fn from_const(index: usize) -> Self {
        match Self::new(index) {
            Some(led) => led,
            None => panic!("LED index out of range"),
        }
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

/// Ergebnis eines Navigationsschritts im Menü
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Eine Zeile nach unten
    MovedDown,
    /// Eine Zeile nach oben
    MovedUp,
    /// Von der letzten Zeile zurück auf die erste
    WrappedToFirst,
    /// Von der ersten Zeile auf die letzte
    WrappedToLast,
}

/// Ergebnis einer Bestätigung: welche Bedingung wurde umgeschaltet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub condition: Condition,
    /// Neuer Wert der Bedingung
    pub value: bool,
    /// Ausgang nach Neuberechnung
    pub output_enabled: bool,
}

/// Zusammenfassung eines Schleifendurchlaufs (für Logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    pub navigation: Option<Navigation>,
    pub confirmed: Option<Confirmation>,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedIndex {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LED {}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Navigation {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Navigation::MovedDown => defmt::write!(fmt, "MovedDown"),
            Navigation::MovedUp => defmt::write!(fmt, "MovedUp"),
            Navigation::WrappedToFirst => defmt::write!(fmt, "WrappedToFirst"),
            Navigation::WrappedToLast => defmt::write!(fmt, "WrappedToLast"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Confirmation {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Confirmation {{ condition: {}, value: {}, output: {} }}",
            self.condition,
            self.value,
            self.output_enabled
        )
    }
}
