//! Interrupt-safe access to a [`Controller`] stored in a `static`.
//!
//! Each entry point takes the critical section for the whole event, so a tick
//! increment can never interleave with the read-compare-write of the debouncer
//! or with a sample landing in the averaging window.
//!
//! ```ignore
//! static DEVICE: SharedController<Rotator, Pins> = SharedController::new();
//!
//! #[interrupt]
//! fn TIM1_OVF() {
//!     let _ = DEVICE.on_tick();
//! }
//! ```

use core::cell::RefCell;
use critical_section::Mutex;

use crate::controller::{Actuator, Controller};
use crate::debounce::PowerState;
use crate::events::Event;
use crate::output::OutputDriver;

/// Errors returned by [`SharedController`] entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    /// No controller has been installed yet.
    NotInstalled,
}

impl core::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControllerError::NotInstalled => write!(f, "controller not installed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ControllerError {}

/// A controller slot shared between interrupt handlers.
pub struct SharedController<A, O> {
    slot: Mutex<RefCell<Option<Controller<A, O>>>>,
}

impl<A, O> SharedController<A, O> {
    /// Creates an empty slot. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<A, O> Default for SharedController<A, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, O> SharedController<A, O>
where
    A: Actuator,
    O: OutputDriver<A::Line>,
{
    /// Places `controller` in the slot, returning any previous one.
    pub fn install(&self, controller: Controller<A, O>) -> Option<Controller<A, O>> {
        critical_section::with(|cs| self.slot.borrow_ref_mut(cs).replace(controller))
    }

    /// Removes the controller from the slot.
    pub fn take(&self) -> Option<Controller<A, O>> {
        critical_section::with(|cs| self.slot.borrow_ref_mut(cs).take())
    }

    /// Runs `f` on the controller inside a critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller<A, O>) -> R) -> Result<R, ControllerError> {
        critical_section::with(|cs| {
            let mut slot = self.slot.borrow_ref_mut(cs);
            let controller = slot.as_mut().ok_or(ControllerError::NotInstalled)?;
            Ok(f(controller))
        })
    }

    /// See [`Controller::on_tick`].
    pub fn on_tick(&self) -> Result<(), ControllerError> {
        self.with(|controller| controller.on_tick())
    }

    /// See [`Controller::on_edge`].
    pub fn on_edge(&self) -> Result<Option<PowerState>, ControllerError> {
        self.with(|controller| controller.on_edge())
    }

    /// See [`Controller::on_sample_ready`].
    pub fn on_sample_ready(&self, raw: u16) -> Result<(), ControllerError> {
        self.with(|controller| controller.on_sample_ready(raw))
    }

    /// See [`Controller::dispatch`].
    pub fn dispatch(&self, event: Event) -> Result<(), ControllerError> {
        self.with(|controller| controller.dispatch(event))
    }

    /// Current power state.
    pub fn power(&self) -> Result<PowerState, ControllerError> {
        self.with(|controller| controller.power())
    }
}
