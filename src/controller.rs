//! The event-processing core shared by both device variants.
//!
//! Provides [`Controller`], which owns the tick counter, the switch debouncer,
//! the power state, an [`Actuator`] policy and the outputs it drives. All work
//! happens through the entry points [`Controller::on_tick`],
//! [`Controller::on_edge`] and [`Controller::on_sample_ready`], or through
//! [`Controller::dispatch`] with an [`Event`].

use crate::debounce::{Debouncer, PowerState};
use crate::events::{Event, EventQueue};
use crate::hysteresis::HysteresisDriver;
use crate::output::{Lamp, OutputDriver, RgbLine};
use crate::rotation::Rotator;
use crate::time::{Tick, TickSource};

/// An actuation policy that runs while the device is powered on.
///
/// Hooks are only invoked while powered, except [`Actuator::power_off`], which
/// runs in the same event as the transition to off and must leave every line
/// it owns low.
pub trait Actuator {
    /// Identifies the output lines this policy drives.
    type Line: Copy;

    /// Minimum ticks between accepted switch edges for this variant.
    const DEBOUNCE_TICKS: u8;

    /// Called once per tick while powered.
    fn on_tick<O: OutputDriver<Self::Line>>(&mut self, _outputs: &mut O) {}

    /// Called for every analog sample while powered.
    fn on_sample<O: OutputDriver<Self::Line>>(&mut self, _raw: u16, _outputs: &mut O) {}

    /// Called on the transition to on.
    fn power_on<O: OutputDriver<Self::Line>>(&mut self, _outputs: &mut O) {}

    /// Called on the transition to off. Must drive every line low.
    fn power_off<O: OutputDriver<Self::Line>>(&mut self, outputs: &mut O);
}

/// Switch-controlled device core.
///
/// # Type Parameters
/// * `A` - Actuation policy
/// * `O` - Output driver for the policy's lines
pub struct Controller<A, O> {
    ticks: TickSource,
    debouncer: Debouncer,
    power: PowerState,
    actuator: A,
    outputs: O,
}

/// Single lamp switched by ambient light.
pub type AmbientLightController<O> = Controller<HysteresisDriver, O>;

/// Three LEDs lit in rotation.
pub type ColorRotationController<O> = Controller<Rotator, O>;

impl<O: OutputDriver<Lamp>> Controller<HysteresisDriver, O> {
    /// Creates a powered-off ambient-light controller with the lamp dark.
    pub fn new(outputs: O) -> Self {
        Self::with_actuator(HysteresisDriver::new(), outputs)
    }
}

impl<O: OutputDriver<RgbLine>> Controller<Rotator, O> {
    /// Creates a powered-off color-rotation controller with all LEDs dark.
    pub fn new(outputs: O) -> Self {
        Self::with_actuator(Rotator::new(), outputs)
    }
}

impl<A, O> Controller<A, O>
where
    A: Actuator,
    O: OutputDriver<A::Line>,
{
    /// Creates a powered-off controller around any actuation policy.
    ///
    /// All of the policy's lines are driven low before returning.
    pub fn with_actuator(mut actuator: A, mut outputs: O) -> Self {
        actuator.power_off(&mut outputs);

        Self {
            ticks: TickSource::new(),
            debouncer: Debouncer::new(A::DEBOUNCE_TICKS),
            power: PowerState::Off,
            actuator,
            outputs,
        }
    }

    /// Processes one event.
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Edge => {
                self.on_edge();
            }
            Event::SampleReady(raw) => self.on_sample_ready(raw),
        }
    }

    /// Processes every event waiting in `queue`, oldest first.
    ///
    /// Returns the number of events handled.
    pub fn run_pending<const N: usize>(&mut self, queue: &EventQueue<N>) -> usize {
        queue.drain(|event| self.dispatch(event))
    }

    /// Timer period elapsed.
    pub fn on_tick(&mut self) {
        let now = self.ticks.advance();
        self.debouncer.observe(now);

        if self.power.is_on() {
            self.actuator.on_tick(&mut self.outputs);
        }
    }

    /// The switch changed level.
    ///
    /// Returns the new power state if the edge was accepted, `None` if it was
    /// filtered as a bounce.
    pub fn on_edge(&mut self) -> Option<PowerState> {
        let now = self.ticks.now();
        if !self.debouncer.accept(now) {
            return None;
        }

        self.power = self.power.toggled();
        match self.power {
            PowerState::On => self.actuator.power_on(&mut self.outputs),
            PowerState::Off => self.actuator.power_off(&mut self.outputs),
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("power {} at tick {}", self.power, now);

        Some(self.power)
    }

    /// A new analog reading is available.
    pub fn on_sample_ready(&mut self, raw: u16) {
        if self.power.is_on() {
            self.actuator.on_sample(raw, &mut self.outputs);
        }
    }

    /// Current power state.
    pub fn power(&self) -> PowerState {
        self.power
    }

    /// Current tick.
    pub fn now(&self) -> Tick {
        self.ticks.now()
    }

    /// Switch debouncer state.
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// The actuation policy.
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// The output driver.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Mutable access to the output driver.
    ///
    /// Writing lines directly bypasses the controller; use for hardware
    /// maintenance only.
    pub fn outputs_mut(&mut self) -> &mut O {
        &mut self.outputs
    }

    /// Consumes the controller, returning the output driver.
    pub fn into_outputs(self) -> O {
        self.outputs
    }
}
