//! Joystick-Eingaben: Achse, Taster und Bestätigungs-Erkennung

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{ADC_MAX, AXIS_SETTLE_US};
use crate::traits::AnalogChannel;

/// Liest die Joystick-Achse und die Taster-Leitung
///
/// Keine Entprellung hier: die Leitung wird roh zurückgegeben.
pub struct AxisSampler<A, P, D> {
    adc: A,
    channel: u8,
    button: P,
    delay: D,
}

impl<A, P, D> AxisSampler<A, P, D>
where
    A: AnalogChannel,
    P: InputPin<Error = Infallible>,
    D: DelayNs,
{
    /// # Parameter
    /// - `adc`: Analog-Wandler
    /// - `channel`: Kanal der Joystick-Achse
    /// - `button`: Taster-Leitung (Pull-Up)
    /// - `delay`: blockierender Delay für die Einschwingzeit
    pub fn new(adc: A, channel: u8, button: P, delay: D) -> Self {
        Self {
            adc,
            channel,
            button,
            delay,
        }
    }

    /// Rohwert der Achse (0..=4095)
    pub fn read_axis(&mut self) -> u16 {
        self.adc.select_channel(self.channel);
        self.delay.delay_us(AXIS_SETTLE_US);
        self.adc.read_raw().min(ADC_MAX)
    }

    /// Leitungspegel des Tasters: `true` = losgelassen, `false` = gedrückt
    pub fn read_button(&mut self) -> bool {
        let Ok(level) = self.button.is_high();
        level
    }
}

/// Erkennt das Loslassen des Tasters (gedrückt → losgelassen)
///
/// Pro Durchlauf zwei Lesungen: `first` vor und `settled` nach der
/// Entprell-Pause. Bestätigt wird, wenn `settled` losgelassen ist und die
/// erste Lesung des *vorherigen* Durchlaufs gedrückt war.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmDetector {
    previous_level: bool,
}

impl ConfirmDetector {
    /// Startet im Zustand "losgelassen"
    pub const fn new() -> Self {
        Self {
            previous_level: true,
        }
    }

    pub fn update(&mut self, first: bool, settled: bool) -> bool {
        let confirmed = settled && !self.previous_level;
        self.previous_level = first;
        confirmed
    }
}

impl Default for ConfirmDetector {
    fn default() -> Self {
        Self::new()
    }
}
