// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_zutrittskontrolle::config::{
    DISPLAY_I2C_ADDRESS, DISPLAY_SCL_GPIO_PIN, DISPLAY_SDA_GPIO_PIN, JOYSTICK_BUTTON_GPIO_PIN,
    JOYSTICK_Y_GPIO_PIN, LED_GPIO_PIN,
};
use esp_zutrittskontrolle::tasks::access_control_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den
/// Steuer-Task. Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!(
        "Zutrittskontrolle: LEDs an GPIO{}, Joystick Y an GPIO{}, Taster an GPIO{}",
        LED_GPIO_PIN, JOYSTICK_Y_GPIO_PIN, JOYSTICK_BUTTON_GPIO_PIN
    );
    info!(
        "Display: SSD1306 @ 0x{:x} (SDA GPIO{}, SCL GPIO{})",
        DISPLAY_I2C_ADDRESS, DISPLAY_SDA_GPIO_PIN, DISPLAY_SCL_GPIO_PIN
    );

    // Spawn Steuer-Task (besitzt alle Peripherie für Menü und LEDs)
    spawner
        .spawn(access_control_task(
            peripherals.RMT,
            peripherals.GPIO8,
            peripherals.ADC1,
            peripherals.GPIO2,
            peripherals.GPIO10,
            peripherals.I2C0,
            peripherals.GPIO6,
            peripherals.GPIO7,
        ))
        .expect("Failed to spawn access control task");

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
