// Projekt-Konfiguration: Hardware-Zuordnungen und Timing der Peripherie
//
// Verhaltens-Konstanten (Schwellwerte, Wartezeiten, Farben) liegen in
// zutritt_core::config.

// ============================================================================
// LED-Matrix Konfiguration (WS2812, 5x5)
// ============================================================================

/// GPIO-Pin für die Datenleitung der LED-Matrix
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing (1 Tick = 12,5 ns)
pub const RMT_CLOCK_MHZ: u32 = 80;

/// WS2812 Bit-Timing in RMT-Ticks (bei 80 MHz)
/// 0-Bit: 0,4 µs high, 0,85 µs low
pub const T0H_TICKS: u16 = 32;
pub const T0L_TICKS: u16 = 68;
/// 1-Bit: 0,8 µs high, 0,45 µs low
pub const T1H_TICKS: u16 = 64;
pub const T1L_TICKS: u16 = 36;

// ============================================================================
// Joystick Konfiguration
// ============================================================================

/// GPIO-Pin der Y-Achse (ADC1)
pub const JOYSTICK_Y_GPIO_PIN: u8 = 2;

/// ADC-Kanal der Y-Achse (GPIO2 = ADC1 Kanal 2)
pub const JOYSTICK_Y_ADC_CHANNEL: u8 = 2;

/// GPIO-Pin des Joystick-Tasters (Pull-Up, gedrückt = low)
pub const JOYSTICK_BUTTON_GPIO_PIN: u8 = 10;

// ============================================================================
// OLED-Display Konfiguration (SSD1306, 128x64)
// ============================================================================

/// I2C-Datenleitung
pub const DISPLAY_SDA_GPIO_PIN: u8 = 6;

/// I2C-Taktleitung
pub const DISPLAY_SCL_GPIO_PIN: u8 = 7;

/// I2C-Frequenz in kHz
pub const DISPLAY_I2C_KHZ: u32 = 400;

/// I2C-Adresse des Displays
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;
