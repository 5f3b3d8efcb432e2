// Zutrittskontrolle Task - Joystick-Menü, Zugriffslogik und LED-Matrix
use core::convert::Infallible;

use defmt::{debug, error, info};
use embassy_time::Delay as AsyncDelay;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use zutritt_core::{AccessController, AnalogChannel, AxisSampler, LedTransport, MenuDisplay};

use crate::config::{DISPLAY_I2C_KHZ, JOYSTICK_Y_ADC_CHANNEL};
use crate::hal::{AdcJoystick, OledMenuDisplay, RmtLedTransport};

/// Steuerschleife - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Startet die Anzeige (LEDs + Menü) und führt danach endlos
/// `AccessController::run_cycle()` aus. Es gibt nur diesen einen Task,
/// der den Zustand verändert; Locks sind nicht nötig.
///
/// # Parameter
/// - `sampler`: Joystick-Achse und Taster
/// - `display`: Menü-Display
/// - `transport`: LED-Datenleitung
pub async fn access_control_logic<A, P, S, M, T>(
    mut sampler: AxisSampler<A, P, S>,
    mut display: M,
    mut transport: T,
) where
    A: AnalogChannel,
    P: InputPin<Error = Infallible>,
    S: DelayNs,
    M: MenuDisplay,
    T: LedTransport,
{
    let mut controller = AccessController::new();

    if let Err(e) = controller.start(&mut display, &mut transport) {
        error!("LED: Start-Frame unvollständig: {}", e);
    }
    info!("Startzustand: {}", controller.conditions());

    let mut delay = AsyncDelay;

    // Hauptschleife: läuft bis zum Abschalten
    loop {
        match controller
            .run_cycle(&mut sampler, &mut display, &mut transport, &mut delay)
            .await
        {
            Ok(report) => {
                if let Some(navigation) = report.navigation {
                    debug!("Menü: {} → {}", navigation, controller.cursor());
                }
                if let Some(confirmation) = report.confirmed {
                    info!(
                        "{} = {}, Ausgang {}",
                        confirmation.condition,
                        confirmation.value,
                        if confirmation.output_enabled {
                            "frei"
                        } else {
                            "gesperrt"
                        }
                    );
                }
            }
            // Matrix zeigt ein unvollständiges Bild bis zum nächsten flush()
            Err(e) => error!("LED: Übertragung fehlgeschlagen: {}", e),
        }
    }
}

/// Zutrittskontrolle Task - Embassy Task
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `access_control_logic()` Funktion auf.
///
/// # Parameter
/// - `rmt_peripheral` / `led_pin`: RMT und GPIO8 für die LED-Matrix
/// - `adc1` / `y_pin`: ADC1 und GPIO2 für die Joystick Y-Achse
/// - `button_pin`: GPIO10 für den Joystick-Taster
/// - `i2c0` / `sda` / `scl`: I2C0 mit GPIO6/GPIO7 für das OLED
#[allow(clippy::too_many_arguments)]
#[embassy_executor::task]
pub async fn access_control_task(
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    led_pin: esp_hal::peripherals::GPIO8<'static>,
    adc1: esp_hal::peripherals::ADC1<'static>,
    y_pin: esp_hal::peripherals::GPIO2<'static>,
    button_pin: esp_hal::peripherals::GPIO10<'static>,
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
) {
    // LED-Matrix: RMT Kanal 0
    let transport = RmtLedTransport::new(rmt_peripheral, led_pin);

    // Joystick: Y-Achse + Taster (Pull-Up, gedrückt = low)
    let joystick = AdcJoystick::new(adc1, y_pin);
    let button = Input::new(button_pin, InputConfig::default().with_pull(Pull::Up));
    let sampler = AxisSampler::new(joystick, JOYSTICK_Y_ADC_CHANNEL, button, Delay::new());

    // OLED-Display über I2C
    let i2c = I2c::new(
        i2c0,
        I2cConfig::default().with_frequency(Rate::from_khz(DISPLAY_I2C_KHZ)),
    )
    .expect("Failed to initialize I2C")
    .with_sda(sda)
    .with_scl(scl);
    let display = OledMenuDisplay::new(i2c);

    access_control_logic(sampler, display, transport).await;
}
