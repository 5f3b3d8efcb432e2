//! Zugriffslogik: vier Bedingungen und der daraus berechnete Ausgang

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::OUTPUT_LED;
use crate::frame::LedFrame;
use crate::logic::{access_granted, status_color};
use crate::types::LedIndex;

/// Eine der vier Zutritts-Bedingungen, in Menü-Reihenfolge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Condition {
    GestureRecognized,
    AllowedHour,
    AllowedDay,
    DoormanOverride,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::GestureRecognized,
        Condition::AllowedHour,
        Condition::AllowedDay,
        Condition::DoormanOverride,
    ];

    /// Position im Menü (0..=3)
    pub const fn entry_index(self) -> usize {
        match self {
            Condition::GestureRecognized => 0,
            Condition::AllowedHour => 1,
            Condition::AllowedDay => 2,
            Condition::DoormanOverride => 3,
        }
    }

    /// Bedingung zu einer Menü-Position
    pub fn from_entry_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Menü-Text auf dem Display
    pub const fn label(self) -> &'static str {
        match self {
            Condition::GestureRecognized => "Geste erkannt",
            Condition::AllowedHour => "Uhrzeit erlaubt",
            Condition::AllowedDay => "Tag erlaubt",
            Condition::DoormanOverride => "Portier",
        }
    }
}

/// Status-LED einer Bedingung: `4 - entry_index`
///
/// Die Anzeige ist gegenüber dem Menü gespiegelt (GR → 4, PT → 1).
pub const fn led_index(condition: Condition) -> LedIndex {
    LedIndex::from_const(4 - condition.entry_index())
}

/// Aktuelle Werte der vier Bedingungen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionSet {
    pub gesture_recognized: bool,
    pub allowed_hour: bool,
    pub allowed_day: bool,
    pub doorman_override: bool,
}

impl ConditionSet {
    /// Startzustand: nur die Portier-Sperre ist aktiv
    pub const fn new() -> Self {
        Self {
            gesture_recognized: false,
            allowed_hour: false,
            allowed_day: false,
            doorman_override: true,
        }
    }

    pub fn get(&self, condition: Condition) -> bool {
        match condition {
            Condition::GestureRecognized => self.gesture_recognized,
            Condition::AllowedHour => self.allowed_hour,
            Condition::AllowedDay => self.allowed_day,
            Condition::DoormanOverride => self.doorman_override,
        }
    }

    fn slot(&mut self, condition: Condition) -> &mut bool {
        match condition {
            Condition::GestureRecognized => &mut self.gesture_recognized,
            Condition::AllowedHour => &mut self.allowed_hour,
            Condition::AllowedDay => &mut self.allowed_day,
            Condition::DoormanOverride => &mut self.doorman_override,
        }
    }

    pub fn access_granted(&self) -> bool {
        access_granted(
            self.gesture_recognized,
            self.allowed_hour,
            self.allowed_day,
            self.doorman_override,
        )
    }
}

impl Default for ConditionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Besitzt die Bedingungen und schreibt deren Zustand in den LED-Puffer
///
/// Keine der Methoden überträgt den Puffer; das übernimmt der Aufrufer
/// mit einem einzigen `flush()`.
#[derive(Debug, Clone, Default)]
pub struct AccessLogic {
    conditions: ConditionSet,
}

impl AccessLogic {
    pub const fn new() -> Self {
        Self {
            conditions: ConditionSet::new(),
        }
    }

    pub fn conditions(&self) -> &ConditionSet {
        &self.conditions
    }

    /// Kippt eine Bedingung und färbt ihre LED (grün = wahr, rot = falsch)
    pub fn toggle(&mut self, frame: &mut LedFrame, condition: Condition) -> bool {
        let slot = self.conditions.slot(condition);
        *slot = !*slot;
        let value = *slot;
        frame.set_pixel(led_index(condition), status_color(value));
        value
    }

    /// Berechnet den Ausgang und färbt die Ausgangs-LED
    pub fn evaluate_output(&self, frame: &mut LedFrame) -> bool {
        let enabled = self.conditions.access_granted();
        frame.set_pixel(OUTPUT_LED, status_color(enabled));
        enabled
    }

    /// Färbt alle Bedingungs-LEDs nach dem aktuellen Zustand
    pub fn paint_conditions(&self, frame: &mut LedFrame) {
        for condition in Condition::ALL {
            frame.set_pixel(led_index(condition), status_color(self.conditions.get(condition)));
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Condition {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConditionSet {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ConditionSet {{ GR: {}, HO: {}, DI: {}, PT: {} }}",
            self.gesture_recognized,
            self.allowed_hour,
            self.allowed_day,
            self.doorman_override
        )
    }
}
