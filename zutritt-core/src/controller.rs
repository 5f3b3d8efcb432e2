//! Steuerung: verbindet Joystick, Menü, Zugriffslogik und LED-Matrix
//!
//! Der gesamte Zustand liegt in einem `AccessController`, der vom
//! einzigen Steuer-Task besessen wird. Keine globalen Variablen.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;

use crate::access::{AccessLogic, ConditionSet};
use crate::config::{DEBOUNCE_MS, LOOP_INTERVAL_MS};
use crate::frame::LedFrame;
use crate::input::{AxisSampler, ConfirmDetector};
use crate::logic::bucketize;
use crate::menu::{MenuCursor, render_menu};
use crate::traits::{AnalogChannel, LedError, LedTransport, MenuDisplay};
use crate::types::{Confirmation, CycleReport, Navigation};

#[derive(Debug, Clone, Default)]
pub struct AccessController {
    frame: LedFrame,
    logic: AccessLogic,
    cursor: MenuCursor,
    detector: ConfirmDetector,
}

impl AccessController {
    pub const fn new() -> Self {
        Self {
            frame: LedFrame::new(),
            logic: AccessLogic::new(),
            cursor: MenuCursor::new(),
            detector: ConfirmDetector::new(),
        }
    }

    pub fn frame(&self) -> &LedFrame {
        &self.frame
    }

    pub fn conditions(&self) -> &ConditionSet {
        self.logic.conditions()
    }

    pub fn cursor(&self) -> &MenuCursor {
        &self.cursor
    }

    /// Startsequenz: Matrix löschen, Status-LEDs setzen, Menü zeichnen
    ///
    /// Nach dem Start zeigen die LEDs 1..=4 die Bedingungen und LED 12
    /// den Ausgang (anfangs gesperrt).
    pub fn start<M, T>(&mut self, display: &mut M, transport: &mut T) -> Result<(), LedError>
    where
        M: MenuDisplay,
        T: LedTransport,
    {
        self.frame.clear();
        self.frame.flush(transport)?;

        self.cursor.reset();
        self.logic.paint_conditions(&mut self.frame);
        self.logic.evaluate_output(&mut self.frame);
        self.frame.flush(transport)?;

        render_menu(display, &self.cursor);
        Ok(())
    }

    /// Navigationsschritt aus einem Achsen-Rohwert
    pub fn handle_axis(&mut self, raw: u16) -> Option<Navigation> {
        self.cursor.navigate(bucketize(raw))
    }

    /// Schaltet die Bedingung unter dem Cursor um und überträgt beide
    /// LED-Änderungen (Bedingung + Ausgang) mit einem `flush()`
    pub fn confirm<T: LedTransport>(
        &mut self,
        transport: &mut T,
    ) -> Result<Confirmation, LedError> {
        let condition = self.cursor.selected();
        let value = self.logic.toggle(&mut self.frame, condition);
        let output_enabled = self.logic.evaluate_output(&mut self.frame);
        self.frame.flush(transport)?;

        Ok(Confirmation {
            condition,
            value,
            output_enabled,
        })
    }

    /// Ein Durchlauf der Steuerschleife
    ///
    /// 1. Achse lesen und navigieren (Menü neu zeichnen bei Bewegung)
    /// 2. `LOOP_INTERVAL_MS` warten
    /// 3. Taster lesen, `DEBOUNCE_MS` warten, erneut lesen
    /// 4. Bei Bestätigung: umschalten, auswerten, übertragen, Menü zeichnen
    pub async fn run_cycle<A, P, S, M, T, D>(
        &mut self,
        sampler: &mut AxisSampler<A, P, S>,
        display: &mut M,
        transport: &mut T,
        delay: &mut D,
    ) -> Result<CycleReport, LedError>
    where
        A: AnalogChannel,
        P: InputPin<Error = Infallible>,
        S: embedded_hal::delay::DelayNs,
        M: MenuDisplay,
        T: LedTransport,
        D: AsyncDelayNs,
    {
        let navigation = self.handle_axis(sampler.read_axis());
        if navigation.is_some() {
            render_menu(display, &self.cursor);
        }

        delay.delay_ms(LOOP_INTERVAL_MS).await;

        let first = sampler.read_button();
        delay.delay_ms(DEBOUNCE_MS).await;
        let settled = sampler.read_button();

        let mut confirmed = None;
        if self.detector.update(first, settled) {
            // Menü auch nach fehlgeschlagenem flush() neu zeichnen
            let result = self.confirm(transport);
            render_menu(display, &self.cursor);
            confirmed = Some(result?);
        }

        Ok(CycleReport {
            navigation,
            confirmed,
        })
    }
}
