//! Zutritt Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie enthält Zustand, Menü-Logik und Zugriffsregel; die Peripherie
//! wird über Traits angebunden.

#![no_std]

pub mod access;
pub mod config;
pub mod controller;
pub mod frame;
pub mod input;
pub mod logic;
pub mod menu;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use access::{AccessLogic, Condition, ConditionSet, led_index};
pub use controller::AccessController;
pub use frame::LedFrame;
pub use input::{AxisSampler, ConfirmDetector};
pub use logic::{access_granted, bucketize, status_color};
pub use menu::{MenuCursor, render_menu};
pub use traits::{AnalogChannel, LedError, LedTransport, MenuDisplay};
pub use types::{Confirmation, CycleReport, LedIndex, Navigation};
