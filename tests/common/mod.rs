//! Shared test infrastructure for switch-led-core integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use switch_led_core::{
    Actuator, Controller, Lamp, Level, OutputDriver, RgbLed, RgbLine, Srgb,
};

// ============================================================================
// Mock Outputs
// ============================================================================

/// A single recorded output write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Lamp(Level),
    Rgb(RgbLine, Level),
}

/// Mock pin bank that records every write for testing
pub struct MockOutputs {
    lamp: Level,
    rgb: [Level; 3],
    history: heapless::Vec<Write, 256>,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            lamp: Level::Low,
            rgb: [Level::Low; 3],
            history: heapless::Vec::new(),
        }
    }

    pub fn lamp(&self) -> Level {
        self.lamp
    }

    pub fn rgb(&self, line: RgbLine) -> Level {
        self.rgb[line.index()]
    }

    /// Lines currently driven high.
    pub fn lit(&self) -> heapless::Vec<RgbLine, 3> {
        RgbLine::ALL
            .into_iter()
            .filter(|&line| self.rgb(line).is_high())
            .collect()
    }

    pub fn all_low(&self) -> bool {
        !self.lamp.is_high() && self.lit().is_empty()
    }

    pub fn history(&self) -> &[Write] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl OutputDriver<Lamp> for MockOutputs {
    fn set_output(&mut self, _line: Lamp, level: Level) {
        self.lamp = level;
        let _ = self.history.push(Write::Lamp(level));
    }
}

impl OutputDriver<RgbLine> for MockOutputs {
    fn set_output(&mut self, line: RgbLine, level: Level) {
        self.rgb[line.index()] = level;
        let _ = self.history.push(Write::Rgb(line, level));
    }
}

// ============================================================================
// Mock RGB LED
// ============================================================================

/// Mock LED that records all color changes for testing
pub struct MockRgbLed {
    current_color: Srgb,
    color_history: heapless::Vec<Srgb, 32>,
}

impl MockRgbLed {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0.5, 0.5, 0.5),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> Srgb {
        self.current_color
    }

    pub fn color_history(&self) -> &[Srgb] {
        &self.color_history
    }
}

impl RgbLed for MockRgbLed {
    fn set_color(&mut self, color: Srgb) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Deliver `n` timer ticks
pub fn tick_n<A, O>(controller: &mut Controller<A, O>, n: usize)
where
    A: Actuator,
    O: OutputDriver<A::Line>,
{
    for _ in 0..n {
        controller.on_tick();
    }
}

/// Advance past the debounce window and press the switch
pub fn switch_on<A, O>(controller: &mut Controller<A, O>)
where
    A: Actuator,
    O: OutputDriver<A::Line>,
{
    tick_n(controller, A::DEBOUNCE_TICKS as usize);
    assert!(controller.on_edge().is_some(), "edge after debounce window must be accepted");
    assert!(controller.power().is_on());
}

/// Feed a full window of samples
pub fn feed<A, O>(controller: &mut Controller<A, O>, samples: &[u16])
where
    A: Actuator,
    O: OutputDriver<A::Line>,
{
    for &sample in samples {
        controller.on_sample_ready(sample);
    }
}
