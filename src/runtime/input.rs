use std::io::BufRead;
use std::thread;
use tracing::{debug, warn};

use crate::runtime::{EventSender, RuntimeEvent};

/// Reads lines from `reader` on a plain thread and forwards them as
/// [`RuntimeEvent::Input`]. Sends [`RuntimeEvent::InputClosed`] at EOF.
///
/// Runs on a std thread: a read blocked on the terminal must not keep the
/// tokio runtime alive at shutdown.
pub fn spawn_line_reader<R>(reader: R, sender: EventSender) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if sender.send(RuntimeEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            }
        }
        debug!("Input closed");
        let _ = sender.send(RuntimeEvent::InputClosed);
    })
}

pub fn spawn_stdin_reader(sender: EventSender) -> thread::JoinHandle<()> {
    spawn_line_reader(std::io::BufReader::new(std::io::stdin()), sender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::event_channel;
    use std::io::Cursor;

    #[tokio::test]
    async fn test_lines_then_close() {
        let (sender, mut receiver) = event_channel();
        let handle = spawn_line_reader(Cursor::new("3\nr\n"), sender);
        handle.join().unwrap();

        assert_eq!(receiver.recv().await, Some(RuntimeEvent::Input("3".to_string())));
        assert_eq!(receiver.recv().await, Some(RuntimeEvent::Input("r".to_string())));
        assert_eq!(receiver.recv().await, Some(RuntimeEvent::InputClosed));
    }
}
