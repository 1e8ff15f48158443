//! Event types and a queue for deferring them from interrupt context.
//!
//! Interrupt handlers can [`post`](EventQueue::post) events and return
//! immediately; the main loop then feeds them to a controller with
//! [`Controller::run_pending`](crate::controller::Controller::run_pending).
//! Events are handled in the order they were posted, so a tick posted before an
//! edge is always counted before that edge is debounced.

use core::cell::RefCell;
use critical_section::Mutex;
use heapless::Deque;

use crate::config::EVENT_QUEUE_DEPTH;

/// Something the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Timer period elapsed.
    Tick,
    /// Switch changed level.
    Edge,
    /// Analog conversion finished with this raw reading.
    SampleReady(u16),
}

/// Errors that can occur when posting events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// The queue is full. The rejected event is handed back.
    Full(Event),
}

impl core::fmt::Display for QueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QueueError::Full(event) => {
                write!(f, "event queue full, dropped {:?}", event)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueError {}

/// Fixed-capacity FIFO of [`Event`]s shared between interrupts and the main loop.
///
/// Every access runs inside its own critical section. Holds
/// [`EVENT_QUEUE_DEPTH`] events unless another capacity is given.
pub struct EventQueue<const N: usize = EVENT_QUEUE_DEPTH> {
    events: Mutex<RefCell<Deque<Event, N>>>,
}

impl<const N: usize> EventQueue<N> {
    /// Creates an empty queue. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Appends an event.
    pub fn post(&self, event: Event) -> Result<(), QueueError> {
        critical_section::with(|cs| self.events.borrow_ref_mut(cs).push_back(event)).map_err(|event| {
            #[cfg(feature = "defmt")]
            defmt::warn!("event queue full, dropped {}", event);
            QueueError::Full(event)
        })
    }

    /// Removes the oldest event.
    pub fn pop(&self) -> Option<Event> {
        critical_section::with(|cs| self.events.borrow_ref_mut(cs).pop_front())
    }

    /// Events waiting to be handled.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.events.borrow_ref(cs).len())
    }

    /// `true` when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pops events one at a time and hands each to `handle` until the queue is empty.
    ///
    /// The critical section is released between events, so interrupts may keep
    /// posting while the queue drains. Returns the number of events handled.
    pub fn drain(&self, mut handle: impl FnMut(Event)) -> usize {
        let mut handled = 0;
        while let Some(event) = self.pop() {
            handle(event);
            handled += 1;
        }
        handled
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
