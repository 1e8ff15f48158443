#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TickSource`**: Free-running 8-bit heartbeat, the only notion of time
//! - **`Debouncer`**: Filters switch edges closer together than a fixed number of ticks
//! - **`PowerState`**: On/off flag flipped by accepted edges, gating all actuation
//! - **`HysteresisDriver`**: Averages light-sensor samples and switches a lamp with a high/low band
//! - **`Rotator`**: Hands the lit LED round three lines, one step per tick
//! - **`Controller`**: Owns all of the above and processes `Event`s
//! - **`SharedController`**: Critical-section guarded controller for use from interrupts
//! - **`EventQueue`**: Defers events from interrupt handlers to the main loop
//! - **`OutputDriver`**: Trait to implement for your output pins
//!
//! All tuning values are compile-time constants in [`config`].

pub mod config;
pub mod controller;
pub mod debounce;
pub mod events;
pub mod hysteresis;
pub mod output;
pub mod rotation;
pub mod shared;
pub mod time;

pub use controller::{Actuator, AmbientLightController, ColorRotationController, Controller};
pub use debounce::{Debouncer, PowerState};
pub use events::{Event, EventQueue, QueueError};
pub use hysteresis::{Decision, HysteresisDriver, SampleWindow};
pub use output::{Lamp, Level, OutputDriver, RgbLed, RgbLedOutputs, RgbLine};
pub use rotation::{RotationStep, Rotator};
pub use shared::{ControllerError, SharedController};
pub use time::{Tick, TickSource};

// Re-export Srgb from palette for RgbLed implementors
pub use palette::Srgb;

/// Color written to an [`RgbLed`] with every line low.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
