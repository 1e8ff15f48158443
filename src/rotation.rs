//! Round-robin color rotation over three LEDs.
//!
//! On every tick while powered, the rotator switches off the step's trailing
//! line and lights its leading line, then moves to the next step. With the
//! tables below each line leads exactly once and trails exactly once per
//! rotation, so the lit LED appears to travel red → green → blue.

use crate::config::{ROTATION_DEBOUNCE_TICKS, ROTATION_STEPS};
use crate::controller::Actuator;
use crate::output::{Level, OutputDriver, RgbLine};

/// Position within one rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationStep {
    #[default]
    First,
    Second,
    Third,
}

impl RotationStep {
    /// The following step, wrapping from `Third` back to `First`.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            RotationStep::First => RotationStep::Second,
            RotationStep::Second => RotationStep::Third,
            RotationStep::Third => RotationStep::First,
        }
    }

    /// Position in the [`LEADING`] and [`TRAILING`] tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            RotationStep::First => 0,
            RotationStep::Second => 1,
            RotationStep::Third => 2,
        }
    }

    /// Line switched on at this step.
    #[inline]
    pub fn leading(self) -> RgbLine {
        LEADING[self.index()]
    }

    /// Line switched off at this step.
    #[inline]
    pub fn trailing(self) -> RgbLine {
        TRAILING[self.index()]
    }
}

/// Line lit at each step.
pub const LEADING: [RgbLine; ROTATION_STEPS] = [RgbLine::Red, RgbLine::Green, RgbLine::Blue];

/// Line darkened at each step; always the previous step's leading line.
pub const TRAILING: [RgbLine; ROTATION_STEPS] = [RgbLine::Blue, RgbLine::Red, RgbLine::Green];

/// Actuation policy of the color-rotation variant.
#[derive(Debug, Clone, Default)]
pub struct Rotator {
    step: RotationStep,
}

impl Rotator {
    /// Creates a rotator at [`RotationStep::First`].
    pub const fn new() -> Self {
        Self {
            step: RotationStep::First,
        }
    }

    /// Step applied on the next powered tick.
    pub fn step(&self) -> RotationStep {
        self.step
    }
}

impl Actuator for Rotator {
    type Line = RgbLine;

    const DEBOUNCE_TICKS: u8 = ROTATION_DEBOUNCE_TICKS;

    fn on_tick<O: OutputDriver<Self::Line>>(&mut self, outputs: &mut O) {
        outputs.set_output(self.step.trailing(), Level::Low);
        outputs.set_output(self.step.leading(), Level::High);
        self.step = self.step.next();
    }

    fn power_off<O: OutputDriver<Self::Line>>(&mut self, outputs: &mut O) {
        for line in RgbLine::ALL {
            outputs.set_output(line, Level::Low);
        }
    }
}
