// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus zutritt-core für die ESP32-C6 Peripherie.

pub mod display;
pub mod joystick;
pub mod led_transport;

pub use display::OledMenuDisplay;
pub use joystick::AdcJoystick;
pub use led_transport::RmtLedTransport;
