// Joystick Y-Achse über ADC1
//
// Auf dem ESP32-C6 gehört der Kanal zum AdcPin; die Oneshot-Messung schaltet
// den Multiplexer selbst um. `select_channel` prüft daher nur die Verdrahtung.

use defmt::{error, warn};
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO2};
use zutritt_core::AnalogChannel;

use crate::config::JOYSTICK_Y_ADC_CHANNEL;

/// Rohwert der Ruhelage; wird bei Messfehlern geliefert (Totzone)
const REST_RAW: u16 = 2048;

pub struct AdcJoystick<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    y_axis: AdcPin<GPIO2<'d>, ADC1<'d>>,
}

impl<'d> AdcJoystick<'d> {
    /// # Parameter
    /// - `adc1`: ADC1 Peripheral
    /// - `y_pin`: GPIO2 (ADC1 Kanal 2), 11 dB Dämpfung für 0..3,3 V
    pub fn new(adc1: ADC1<'d>, y_pin: GPIO2<'d>) -> Self {
        let mut config = AdcConfig::new();
        let y_axis = config.enable_pin(y_pin, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);

        Self { adc, y_axis }
    }
}

impl AnalogChannel for AdcJoystick<'_> {
    fn select_channel(&mut self, channel: u8) {
        if channel != JOYSTICK_Y_ADC_CHANNEL {
            warn!("ADC: Kanal {} ist nicht verdrahtet, lese Y-Achse", channel);
        }
    }

    fn read_raw(&mut self) -> u16 {
        match nb::block!(self.adc.read_oneshot(&mut self.y_axis)) {
            Ok(raw) => raw,
            Err(_) => {
                error!("ADC: Messung fehlgeschlagen");
                REST_RAW
            }
        }
    }
}
