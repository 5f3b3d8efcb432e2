// LED-Transport: WS2812 Eindraht-Protokoll über das RMT Peripheral
//
// Jedes Byte wird als eigene RMT-Übertragung gesendet (8 Pulse, MSB zuerst,
// plus End-Marker). `put_blocking` kehrt erst zurück, wenn die Übertragung
// abgeschlossen ist; die Pausen zwischen den Bytes bleiben deutlich unter der
// Reset-Zeit der LEDs.

use esp_hal::Blocking;
use esp_hal::gpio::Level;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::rmt::{Channel, PulseCode, Rmt, Tx, TxChannelConfig, TxChannelCreator};
use esp_hal::time::Rate;
use zutritt_core::{LedError, LedTransport};

use crate::config::{RMT_CLOCK_MHZ, T0H_TICKS, T0L_TICKS, T1H_TICKS, T1L_TICKS};

/// Pulse pro Byte: 8 Datenbits + End-Marker
const PULSES_PER_BYTE: usize = 9;

/// Real Hardware LED Transport
///
/// Nutzt Kanal 0 des ESP32 RMT Peripherals.
pub struct RmtLedTransport<'d> {
    /// `None` nur, wenn eine Übertragung den Kanal nicht zurückgegeben hat
    channel: Option<Channel<'d, Blocking, Tx>>,
    pulses: [PulseCode; PULSES_PER_BYTE],
    bit_pulses: (PulseCode, PulseCode),
}

impl<'d> RmtLedTransport<'d> {
    /// Erstellt einen neuen RmtLedTransport
    ///
    /// # Parameter
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `pin`: GPIO für die LED-Datenleitung
    ///
    /// # Panics
    /// Wenn das RMT Peripheral nicht initialisiert werden kann. Ohne
    /// LED-Matrix hat das Gerät keinen sinnvollen Betriebsmodus.
    pub fn new(
        rmt_peripheral: esp_hal::peripherals::RMT<'d>,
        pin: impl PeripheralOutput<'d>,
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'d, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(RMT_CLOCK_MHZ))
            .expect("Failed to initialize RMT");

        // Ruhepegel low, keine Trägermodulation, Takt ungeteilt (12,5 ns pro Tick)
        let config = TxChannelConfig::default()
            .with_clk_divider(1)
            .with_idle_output_level(Level::Low)
            .with_idle_output(true)
            .with_carrier_modulation(false);

        let channel = rmt
            .channel0
            .configure_tx(pin, config)
            .expect("Failed to configure RMT TX channel");

        Self {
            channel: Some(channel),
            pulses: [PulseCode::end_marker(); PULSES_PER_BYTE],
            bit_pulses: (
                PulseCode::new(Level::High, T0H_TICKS, Level::Low, T0L_TICKS),
                PulseCode::new(Level::High, T1H_TICKS, Level::Low, T1L_TICKS),
            ),
        }
    }

    /// Kodiert ein Byte in RMT-Pulse, höchstwertiges Bit zuerst
    fn encode(&mut self, byte: u8) {
        for (bit, pulse) in self.pulses[..8].iter_mut().enumerate() {
            *pulse = if byte & (0x80 >> bit) != 0 {
                self.bit_pulses.1
            } else {
                self.bit_pulses.0
            };
        }
        self.pulses[8] = PulseCode::end_marker();
    }
}

impl LedTransport for RmtLedTransport<'_> {
    fn put_blocking(&mut self, byte: u8) -> Result<(), LedError> {
        self.encode(byte);

        let channel = self.channel.take().ok_or(LedError::WriteFailed)?;
        let transaction = channel
            .transmit(&self.pulses)
            .map_err(|_| LedError::WriteFailed)?;

        // Blockiert bis das letzte Bit draußen ist; Kanal kommt zurück
        match transaction.wait() {
            Ok(channel) => {
                self.channel = Some(channel);
                Ok(())
            }
            Err((_, channel)) => {
                self.channel = Some(channel);
                Err(LedError::WriteFailed)
            }
        }
    }
}
