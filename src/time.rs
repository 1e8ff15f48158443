//! Tick-based time keeping.
//!
//! A [`TickSource`] is the only notion of elapsed time in the controller. It is
//! advanced once per timer overflow and wraps silently from 255 to 0; consumers
//! only ever look at differences between two [`Tick`]s.

use crate::config::TICK_PERIOD_MICROS;

/// A snapshot of the free-running 8-bit tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick(pub u8);

impl Tick {
    /// Raw counter value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Ticks elapsed since `earlier`, modulo 256.
    #[inline]
    pub const fn wrapping_since(self, earlier: Tick) -> u8 {
        self.0.wrapping_sub(earlier.0)
    }

    /// The tick that follows this one.
    #[inline]
    pub const fn next(self) -> Tick {
        Tick(self.0.wrapping_add(1))
    }
}

/// Free-running tick counter owned by the timer interrupt.
#[derive(Debug, Clone, Default)]
pub struct TickSource {
    now: Tick,
}

impl TickSource {
    /// Creates a counter starting at tick 0.
    pub const fn new() -> Self {
        Self { now: Tick(0) }
    }

    /// Current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Advances the counter by exactly one tick and returns the new value.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.now = self.now.next();
        self.now
    }
}

/// Converts a tick count to milliseconds, rounding down.
///
/// Exact for every `u32` tick count; the product fits in a `u64`.
pub const fn ticks_to_millis(ticks: u32) -> u64 {
    (ticks as u64 * TICK_PERIOD_MICROS as u64) / 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_from_255_to_0() {
        let mut source = TickSource::new();
        for _ in 0..255 {
            source.advance();
        }
        assert_eq!(source.now(), Tick(255));
        assert_eq!(source.advance(), Tick(0));
    }

    #[test]
    fn wrapping_since_spans_overflow() {
        assert_eq!(Tick(1).wrapping_since(Tick(254)), 3);
        assert_eq!(Tick(10).wrapping_since(Tick(10)), 0);
    }

    #[test]
    fn ticks_to_millis_uses_tick_period() {
        assert_eq!(ticks_to_millis(1), 65);
        assert_eq!(ticks_to_millis(2), 131);
        assert_eq!(ticks_to_millis(0), 0);
    }

    #[test]
    fn ticks_to_millis_does_not_truncate_large_counts() {
        assert_eq!(ticks_to_millis(100_000_000), 6_553_600_000);
        assert_eq!(ticks_to_millis(u32::MAX), 281_474_976_645);
    }
}
