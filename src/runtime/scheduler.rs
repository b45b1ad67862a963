use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::core::{ScheduledTask, Scheduler};
use crate::runtime::{EventSender, RuntimeEvent};

/// Sleeps for each task's delay on its own tokio task, then posts it back.
/// Stale tasks are still delivered; the engine discards them by generation.
pub struct TokioScheduler {
    sender: EventSender,
    handles: Vec<JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(sender: EventSender) -> Self {
        Self {
            sender,
            handles: Vec::new(),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.handles.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Aborts every task that hasn't fired yet.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, task: ScheduledTask) {
        self.handles.retain(|handle| !handle.is_finished());

        let delay = task.delay();
        let sender = self.sender.clone();
        debug!(
            "Scheduling {} for generation {} in {:?}",
            task.name(),
            task.generation,
            delay
        );

        self.handles.push(tokio::spawn(async move {
            sleep(delay).await;
            // The receiver only goes away when the game is shutting down.
            let _ = sender.send(RuntimeEvent::TaskDue(task));
        }));
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
