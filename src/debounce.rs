//! Tick-granular switch debouncing and the power state it drives.
//!
//! Every raw edge from the switch is offered to [`Debouncer::accept`]. An edge
//! arriving fewer than `threshold` ticks after the previously accepted one is a
//! bounce and is dropped without touching any state.
//!
//! Elapsed time is computed with wrapping subtraction, so a 255→0 rollover
//! between two edges is measured correctly. Because the counter is only 8 bits
//! wide, an edge more than 255 ticks after the last accepted one could alias
//! back into the bounce window; [`Debouncer::observe`] closes that gap by
//! latching "window expired" on the tick that first satisfies the threshold.

use crate::time::Tick;

/// Whether the device is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Outputs are held low and actuation is suspended.
    #[default]
    Off,
    /// Actuation runs.
    On,
}

impl PowerState {
    /// The opposite state.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            PowerState::Off => PowerState::On,
            PowerState::On => PowerState::Off,
        }
    }

    /// `true` while actuation runs.
    #[inline]
    pub fn is_on(self) -> bool {
        self == PowerState::On
    }
}

/// Edge filter driven by the tick counter.
#[derive(Debug, Clone)]
pub struct Debouncer {
    threshold: u8,
    last: Tick,
    expired: bool,
}

impl Debouncer {
    /// Creates a debouncer that requires `threshold` ticks between accepted edges.
    ///
    /// The last accepted edge is taken to be tick 0, so edges during the first
    /// `threshold` ticks after reset are ignored.
    pub const fn new(threshold: u8) -> Self {
        Self {
            threshold,
            last: Tick(0),
            expired: threshold == 0,
        }
    }

    /// Minimum ticks between accepted edges.
    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Tick of the most recently accepted edge.
    #[inline]
    pub fn last_accepted(&self) -> Tick {
        self.last
    }

    /// Records the passage of a tick. Call once per tick with the new counter value.
    pub fn observe(&mut self, now: Tick) {
        if !self.expired && now.wrapping_since(self.last) >= self.threshold {
            self.expired = true;
        }
    }

    /// Decides whether an edge seen at `now` is genuine.
    ///
    /// Returns `true` and restarts the debounce window when accepted. A rejected
    /// edge leaves the debouncer untouched.
    pub fn accept(&mut self, now: Tick) -> bool {
        let elapsed = now.wrapping_since(self.last);
        if !self.expired && elapsed < self.threshold {
            #[cfg(feature = "defmt")]
            defmt::trace!("bounce ignored: {} ticks since last edge", elapsed);
            return false;
        }

        self.last = now;
        self.expired = self.threshold == 0;
        true
    }
}
