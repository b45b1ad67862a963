//! Tokio-backed clock, scheduler and input source.
//!
//! None of these touch the engine. They only push [`RuntimeEvent`]s into one
//! channel, and the interface loop feeds them to the engine in arrival order.

pub mod clock;
pub mod input;
pub mod scheduler;

use tokio::sync::mpsc;

use crate::core::ScheduledTask;

pub use clock::{TokioClock, TICK_INTERVAL};
pub use input::spawn_stdin_reader;
pub use scheduler::TokioScheduler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    Input(String),
    InputClosed,
    Tick { epoch: u64 },
    TaskDue(ScheduledTask),
}

pub type EventSender = mpsc::UnboundedSender<RuntimeEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<RuntimeEvent>;

pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
