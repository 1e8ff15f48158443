//! Compile-time configuration shared by both controller variants.

/// Length of one tick in microseconds (timer overflow at clk/4096 on an 8-bit timer).
pub const TICK_PERIOD_MICROS: u32 = 65_536;

/// Full-scale reading of the 10-bit light sensor ADC.
pub const ADC_MAX: u16 = 1023;

/// Minimum ticks between accepted switch edges on the ambient-light variant.
pub const AMBIENT_DEBOUNCE_TICKS: u8 = 1;

/// Minimum ticks between accepted switch edges on the color-rotation variant.
pub const ROTATION_DEBOUNCE_TICKS: u8 = 2;

/// Number of samples averaged before each lamp decision.
pub const SAMPLE_WINDOW: usize = 4;

/// Averages strictly above this turn the lamp on.
pub const HIGH_THRESHOLD: u16 = 300;

/// Averages strictly below this turn the lamp off.
pub const LOW_THRESHOLD: u16 = 200;

/// Steps in one full color rotation.
pub const ROTATION_STEPS: usize = 3;

/// Default capacity of an interrupt-to-main [`EventQueue`](crate::events::EventQueue).
pub const EVENT_QUEUE_DEPTH: usize = 8;

const _: () = assert!(LOW_THRESHOLD < HIGH_THRESHOLD);
const _: () = assert!(HIGH_THRESHOLD <= ADC_MAX);
const _: () = assert!(SAMPLE_WINDOW > 0);
