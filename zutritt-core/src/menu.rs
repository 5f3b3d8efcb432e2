//! Menü-Navigation mit dem Joystick
//!
//! Der Cursor steht auf einer von vier Zeilen. Zwei Zähler merken sich,
//! wie viele Schritte nach unten bzw. oben noch möglich sind; am Rand
//! springt der Cursor auf die gegenüberliegende Zeile.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::access::Condition;
use crate::config::{HIGH_THRESHOLD, LOW_THRESHOLD, MAX_MOVES, MENU_STEP, MENU_STOPS};
use crate::traits::MenuDisplay;
use crate::types::Navigation;

/// Cursor-Position im Menü
///
/// Invariante: `moves_down + moves_up == MAX_MOVES`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMenuCursor"))]
pub struct MenuCursor {
    offset: i32,
    moves_down: u8,
    moves_up: u8,
}

impl MenuCursor {
    /// Erste Zeile, Zähler {0, 3}
    pub const fn new() -> Self {
        Self {
            offset: MENU_STOPS[0],
            moves_down: 0,
            moves_up: MAX_MOVES,
        }
    }

    /// Cursor aus gespeicherten Werten; `None` wenn der Offset keine
    /// Menüzeile ist oder die Zähler nicht zur Zeile passen
    pub fn from_parts(offset: i32, moves_down: u8, moves_up: u8) -> Option<Self> {
        let stop = MENU_STOPS.iter().position(|&row| row == offset)?;
        let consistent = usize::from(moves_down) == stop
            && moves_down.checked_add(moves_up) == Some(MAX_MOVES);

        consistent.then_some(Self {
            offset,
            moves_down,
            moves_up,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Zeilen-Offset auf dem Display (12, 20, 28 oder 36)
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    /// Index der aktuellen Zeile (0..=3)
    pub const fn stop(&self) -> usize {
        ((self.offset - MENU_STOPS[0]) / MENU_STEP) as usize
    }

    pub const fn moves_down(&self) -> u8 {
        self.moves_down
    }

    pub const fn moves_up(&self) -> u8 {
        self.moves_up
    }

    /// Bedingung unter dem Cursor
    pub fn selected(&self) -> Condition {
        // stop() liegt durch die Zähler-Invariante immer in 0..=3
        Condition::ALL[self.stop()]
    }

    /// Ein Navigationsschritt aus einem Achsen-Bucket
    ///
    /// Unter `LOW_THRESHOLD` geht es nach unten, über `HIGH_THRESHOLD` nach
    /// oben; dazwischen liegt die Totzone und nichts passiert.
    pub fn navigate(&mut self, bar: u32) -> Option<Navigation> {
        let event = if bar < LOW_THRESHOLD && self.moves_down < MAX_MOVES {
            self.offset += MENU_STEP;
            self.moves_down += 1;
            self.moves_up -= 1;
            Navigation::MovedDown
        } else if bar > HIGH_THRESHOLD && self.moves_up < MAX_MOVES {
            self.offset -= MENU_STEP;
            self.moves_up += 1;
            self.moves_down -= 1;
            Navigation::MovedUp
        } else if bar < LOW_THRESHOLD && self.moves_down == MAX_MOVES {
            self.offset = MENU_STOPS[0];
            self.moves_down = 0;
            self.moves_up = MAX_MOVES;
            Navigation::WrappedToFirst
        } else if bar > HIGH_THRESHOLD && self.moves_up == MAX_MOVES {
            self.offset = MENU_STOPS[MENU_STOPS.len() - 1];
            self.moves_down = MAX_MOVES;
            self.moves_up = 0;
            Navigation::WrappedToLast
        } else {
            return None;
        };

        debug_assert_eq!(self.moves_down + self.moves_up, MAX_MOVES);
        Some(event)
    }
}

/// Ungeprüfte Form für die Deserialisierung
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMenuCursor {
    offset: i32,
    moves_down: u8,
    moves_up: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMenuCursor> for MenuCursor {
    type Error = &'static str;

    fn try_from(raw: RawMenuCursor) -> Result<Self, Self::Error> {
        Self::from_parts(raw.offset, raw.moves_down, raw.moves_up)
            .ok_or("invalid menu cursor")
    }
}

impl Default for MenuCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Zeichnet das komplette Menü mit Auswahlrahmen an der Cursor-Zeile
pub fn render_menu<D: MenuDisplay>(display: &mut D, cursor: &MenuCursor) {
    display.clear();

    display.draw_text("Menu", 52, 2, 1);
    display.show();

    let row = cursor.offset();
    display.draw_empty_rect(2, row - 1, 120, row + 7);
    display.show();

    for (condition, y) in Condition::ALL.iter().zip(MENU_STOPS) {
        display.draw_text(condition.label(), 6, y, 1);
        display.show();
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MenuCursor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "MenuCursor {{ row: {}, down: {}, up: {} }}",
            self.offset,
            self.moves_down,
            self.moves_up
        )
    }
}
