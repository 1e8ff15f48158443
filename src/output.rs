//! Output boundary: the only way the controller touches the outside world.

use crate::COLOR_OFF;
use palette::Srgb;

/// Logic level of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// `true` for [`Level::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Trait for abstracting the pins the controller drives.
///
/// Implement this for your GPIO (or anything else that can show a level) to let
/// a controller drive it. `L` identifies the line; each controller variant has
/// its own line type. Handle any hardware errors internally - this method
/// cannot fail.
pub trait OutputDriver<L> {
    /// Drives `line` to `level`.
    fn set_output(&mut self, line: L, level: Level);
}

/// The single lamp of the ambient-light variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lamp;

/// One channel of the color-rotation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbLine {
    Red,
    Green,
    Blue,
}

impl RgbLine {
    /// Every channel, in red-green-blue order.
    pub const ALL: [RgbLine; 3] = [RgbLine::Red, RgbLine::Green, RgbLine::Blue];

    /// Position of this channel in [`RgbLine::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            RgbLine::Red => 0,
            RgbLine::Green => 1,
            RgbLine::Blue => 2,
        }
    }
}

/// Trait for RGB LED hardware that takes a whole color at once (PWM, smart LEDs).
pub trait RgbLed {
    /// Sets the LED to the specified RGB color, components in 0.0-1.0.
    fn set_color(&mut self, color: Srgb);
}

/// Drives an [`RgbLed`] from the three on/off lines of the rotation variant.
///
/// Each line maps to one full-scale color channel; the combined color is
/// written on every line change.
pub struct RgbLedOutputs<L: RgbLed> {
    led: L,
    levels: [Level; 3],
}

impl<L: RgbLed> RgbLedOutputs<L> {
    /// Wraps `led` and turns it off.
    pub fn new(mut led: L) -> Self {
        led.set_color(COLOR_OFF);
        Self {
            led,
            levels: [Level::Low; 3],
        }
    }

    /// Current level of `line`.
    pub fn level(&self, line: RgbLine) -> Level {
        self.levels[line.index()]
    }

    /// The color currently shown.
    pub fn color(&self) -> Srgb {
        let channel = |line: RgbLine| if self.level(line).is_high() { 1.0 } else { 0.0 };
        Srgb::new(
            channel(RgbLine::Red),
            channel(RgbLine::Green),
            channel(RgbLine::Blue),
        )
    }

    /// The wrapped LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Releases the wrapped LED.
    pub fn into_inner(self) -> L {
        self.led
    }
}

impl<L: RgbLed> OutputDriver<RgbLine> for RgbLedOutputs<L> {
    fn set_output(&mut self, line: RgbLine, level: Level) {
        self.levels[line.index()] = level;
        let color = self.color();
        self.led.set_color(color);
    }
}
