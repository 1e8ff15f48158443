//! Light-sensor driven lamp control with a hysteresis band.
//!
//! Raw ADC readings are averaged over a fixed window. A full window whose
//! average is above [`HIGH_THRESHOLD`] lights the lamp, one below
//! [`LOW_THRESHOLD`] darkens it, and anything in between (bounds included)
//! leaves the lamp as it was.

use crate::config::{ADC_MAX, AMBIENT_DEBOUNCE_TICKS, HIGH_THRESHOLD, LOW_THRESHOLD, SAMPLE_WINDOW};
use crate::controller::Actuator;
use crate::output::{Lamp, Level, OutputDriver};

/// Running sum of the samples in the current window.
#[derive(Debug, Clone)]
pub struct SampleWindow<const N: usize> {
    sum: u32,
    count: usize,
}

impl<const N: usize> SampleWindow<N> {
    /// Creates an empty window.
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    /// Adds a sample. When it completes the window, returns the truncated
    /// average and starts a new window.
    pub fn push(&mut self, sample: u16) -> Option<u16> {
        self.sum += u32::from(sample);
        self.count += 1;

        if self.count < N {
            return None;
        }

        // count == N > 0 here
        let average = self.sum / self.count as u32;
        self.reset();
        Some(average as u16)
    }

    /// Discards a partially filled window.
    pub fn reset(&mut self) {
        self.sum = 0;
        self.count = 0;
    }

    /// Samples collected in the current window.
    pub fn len(&self) -> usize {
        self.count
    }

    /// `true` when no samples are pending.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of comparing a window average against the hysteresis band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decision {
    /// Average above the high threshold: lamp on.
    Raise,
    /// Average below the low threshold: lamp off.
    Lower,
    /// Average inside the band: keep the current level.
    Hold,
}

/// Classifies a window average.
pub fn classify(average: u16) -> Decision {
    if average > HIGH_THRESHOLD {
        Decision::Raise
    } else if average < LOW_THRESHOLD {
        Decision::Lower
    } else {
        Decision::Hold
    }
}

/// Actuation policy of the ambient-light variant.
#[derive(Debug, Clone, Default)]
pub struct HysteresisDriver {
    window: SampleWindow<SAMPLE_WINDOW>,
    level: Level,
}

impl HysteresisDriver {
    /// Creates a driver with an empty window and the lamp recorded as low.
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            level: Level::Low,
        }
    }

    /// Level last written to the lamp.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Samples collected towards the next decision.
    pub fn pending_samples(&self) -> usize {
        self.window.len()
    }
}

impl Actuator for HysteresisDriver {
    type Line = Lamp;

    const DEBOUNCE_TICKS: u8 = AMBIENT_DEBOUNCE_TICKS;

    fn on_sample<O: OutputDriver<Self::Line>>(&mut self, raw: u16, outputs: &mut O) {
        let Some(average) = self.window.push(raw.min(ADC_MAX)) else {
            return;
        };

        let level = match classify(average) {
            Decision::Raise => Level::High,
            Decision::Lower => Level::Low,
            Decision::Hold => {
                #[cfg(feature = "defmt")]
                defmt::trace!("average {} inside band, lamp held {}", average, self.level);
                return;
            }
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("average {} -> lamp {}", average, level);

        self.level = level;
        outputs.set_output(Lamp, level);
    }

    fn power_off<O: OutputDriver<Self::Line>>(&mut self, outputs: &mut O) {
        self.window.reset();
        self.level = Level::Low;
        outputs.set_output(Lamp, Level::Low);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_reports_truncated_average_on_fourth_sample() {
        let mut window = SampleWindow::<4>::new();
        assert_eq!(window.push(100), None);
        assert_eq!(window.push(101), None);
        assert_eq!(window.push(101), None);
        assert_eq!(window.len(), 3);
        assert_eq!(window.push(101), Some(100));
        assert!(window.is_empty());
    }

    #[test]
    fn window_does_not_overflow_at_full_scale() {
        let mut window = SampleWindow::<4>::new();
        for _ in 0..3 {
            assert_eq!(window.push(u16::MAX), None);
        }
        assert_eq!(window.push(u16::MAX), Some(u16::MAX));
    }

    #[test]
    fn classify_bounds_are_exclusive() {
        assert_eq!(classify(301), Decision::Raise);
        assert_eq!(classify(300), Decision::Hold);
        assert_eq!(classify(250), Decision::Hold);
        assert_eq!(classify(200), Decision::Hold);
        assert_eq!(classify(199), Decision::Lower);
        assert_eq!(classify(0), Decision::Lower);
        assert_eq!(classify(ADC_MAX), Decision::Raise);
    }
}
