use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::core::Clock;
use crate::runtime::{EventSender, RuntimeEvent};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// 1 Hz clock. Each `start` opens a new epoch; ticks carry the epoch they
/// were produced in so the loop can drop ticks queued before a stop.
pub struct TokioClock {
    sender: EventSender,
    epoch: u64,
    handle: Option<JoinHandle<()>>,
}

impl TokioClock {
    pub fn new(sender: EventSender) -> Self {
        Self {
            sender,
            epoch: 0,
            handle: None,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// True when a tick from `epoch` should still count.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.is_running() && epoch == self.epoch
    }
}

impl Clock for TokioClock {
    fn start(&mut self) {
        self.stop();
        self.epoch += 1;

        let epoch = self.epoch;
        let sender = self.sender.clone();
        debug!("Clock started (epoch {})", epoch);

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if sender.send(RuntimeEvent::Tick { epoch }).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Clock stopped (epoch {})", self.epoch);
        }
    }
}

impl Drop for TokioClock {
    fn drop(&mut self) {
        self.stop();
    }
}
