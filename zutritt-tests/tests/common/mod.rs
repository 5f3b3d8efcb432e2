//! Mock-Peripherie für die Host-Tests
//!
//! Nicht jede Test-Datei nutzt jeden Mock.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin};
use rgb::RGB8;
use zutritt_core::{AnalogChannel, AxisSampler, LedError, LedTransport, MenuDisplay};

// ============================================================================
// Gemeinsames Ereignis-Protokoll
// ============================================================================

/// Reihenfolge der Zugriffe auf LED-Leitung und Display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    LedByte,
    Display,
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

// ============================================================================
// Mock LED Transport
// ============================================================================

#[derive(Default)]
pub struct MockLedTransport {
    pub bytes: Vec<u8>,
    pub fail_next_write: bool,
    pub journal: Journal,
}

impl MockLedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gesendete Bytes als Pixel (Drahtreihenfolge G, R, B)
    pub fn pixels(&self) -> Vec<RGB8> {
        self.bytes
            .chunks(3)
            .map(|grb| RGB8 {
                r: grb[1],
                g: grb[0],
                b: grb[2],
            })
            .collect()
    }

    /// Pixel des zuletzt vollständig gesendeten Frames
    pub fn last_frame(&self, led_count: usize) -> Vec<RGB8> {
        let pixels = self.pixels();
        pixels[pixels.len() - led_count..].to_vec()
    }
}

impl LedTransport for MockLedTransport {
    fn put_blocking(&mut self, byte: u8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.bytes.push(byte);
        self.journal.borrow_mut().push(Event::LedByte);
        Ok(())
    }
}

// ============================================================================
// Mock Display
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Text {
        text: String,
        x: i32,
        y: i32,
        scale: u8,
    },
    Rect {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    Show,
}

#[derive(Default)]
pub struct MockDisplay {
    pub calls: Vec<DrawCall>,
    pub journal: Journal,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, call: DrawCall) {
        self.calls.push(call);
        self.journal.borrow_mut().push(Event::Display);
    }

    pub fn redraw_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Clear).count()
    }

    /// Zuletzt gezeichneter Auswahlrahmen
    pub fn last_rect(&self) -> Option<(i32, i32, i32, i32)> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Rect { x1, y1, x2, y2 } => Some((*x1, *y1, *x2, *y2)),
            _ => None,
        })
    }
}

impl MenuDisplay for MockDisplay {
    fn clear(&mut self) {
        self.record(DrawCall::Clear);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u8) {
        self.record(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            scale,
        });
    }

    fn draw_empty_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.record(DrawCall::Rect { x1, y1, x2, y2 });
    }

    fn show(&mut self) {
        self.record(DrawCall::Show);
    }
}

// ============================================================================
// Mock Joystick (Achse + Taster)
// ============================================================================

/// Geskriptete Rohwerte; leer = Ruhelage
#[derive(Clone, Default)]
pub struct MockAnalog {
    pub samples: Rc<RefCell<VecDeque<u16>>>,
    pub selected: Rc<RefCell<Vec<u8>>>,
}

pub const REST_RAW: u16 = 2048;
pub const DOWN_RAW: u16 = 0;
pub const UP_RAW: u16 = 4095;

impl MockAnalog {
    pub fn push(&self, raw: u16) {
        self.samples.borrow_mut().push_back(raw);
    }
}

impl AnalogChannel for MockAnalog {
    fn select_channel(&mut self, channel: u8) {
        self.selected.borrow_mut().push(channel);
    }

    fn read_raw(&mut self) -> u16 {
        self.samples.borrow_mut().pop_front().unwrap_or(REST_RAW)
    }
}

/// Geskriptete Leitungspegel; leer = losgelassen (Pull-Up, high)
#[derive(Clone, Default)]
pub struct MockButton {
    pub levels: Rc<RefCell<VecDeque<bool>>>,
}

pub const RELEASED: bool = true;
pub const PRESSED: bool = false;

impl MockButton {
    pub fn push(&self, level: bool) {
        self.levels.borrow_mut().push_back(level);
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.levels.borrow_mut().pop_front().unwrap_or(RELEASED))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

// ============================================================================
// Mock Delay (blockierend + async)
// ============================================================================

/// Zeichnet angeforderte Wartezeiten in Nanosekunden auf
#[derive(Clone, Default)]
pub struct MockDelay {
    pub waits_ns: Rc<RefCell<Vec<u32>>>,
}

impl MockDelay {
    pub fn waits(&self) -> Vec<u32> {
        self.waits_ns.borrow().clone()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.borrow_mut().push(ns);
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.borrow_mut().push(ns);
    }
}

// ============================================================================
// Test-Aufbau
// ============================================================================

pub const AXIS_CHANNEL: u8 = 1;

pub type TestSampler = AxisSampler<MockAnalog, MockButton, MockDelay>;

/// Alle Mocks plus Sampler; die Handles teilen sich den Zustand
pub struct Rig {
    pub analog: MockAnalog,
    pub button: MockButton,
    pub settle_delay: MockDelay,
    pub loop_delay: MockDelay,
    pub sampler: TestSampler,
    pub display: MockDisplay,
    pub transport: MockLedTransport,
    pub journal: Journal,
}

impl Rig {
    pub fn new() -> Self {
        let analog = MockAnalog::default();
        let button = MockButton::default();
        let settle_delay = MockDelay::default();
        let sampler = AxisSampler::new(
            analog.clone(),
            AXIS_CHANNEL,
            button.clone(),
            settle_delay.clone(),
        );

        let journal = Journal::default();
        let display = MockDisplay {
            journal: journal.clone(),
            ..MockDisplay::default()
        };
        let transport = MockLedTransport {
            journal: journal.clone(),
            ..MockLedTransport::default()
        };

        Self {
            analog,
            button,
            settle_delay,
            loop_delay: MockDelay::default(),
            sampler,
            display,
            transport,
            journal,
        }
    }

    /// Protokoll ab Position `from`
    pub fn events_since(&self, from: usize) -> Vec<Event> {
        self.journal.borrow()[from..].to_vec()
    }

    /// Ein Klick: gedrückt in einem Durchlauf, losgelassen im nächsten
    pub fn script_click(&self) {
        self.button.push(PRESSED);
        self.button.push(PRESSED);
        self.button.push(RELEASED);
        self.button.push(RELEASED);
    }
}
