use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use kanal::Sender;

use crate::events::AppEvent;

/// Read lines on a dedicated thread and forward them to the session.
///
/// Blocking stdin reads never touch the runtime, so the thread is simply
/// left behind when the session ends first.
pub fn spawn_stdin_reader(event_tx: Sender<AppEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            forward_lines(stdin.lock(), &event_tx);
        })
}

/// Send every line as `TextInput`, then `EndOfInput`
pub fn forward_lines(reader: impl BufRead, event_tx: &Sender<AppEvent>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if event_tx.send(AppEvent::TextInput(line)).is_err() {
                    tracing::debug!("Session closed, stopping input reader");
                    return;
                }
            }
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    let _ = event_tx.send(AppEvent::EndOfInput);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_lines_ends_with_end_of_input() {
        let (tx, rx) = kanal::unbounded::<AppEvent>();
        forward_lines("dog window\n\nexit\n".as_bytes(), &tx);

        let mut events = Vec::new();
        while let Ok(Some(event)) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], AppEvent::TextInput(t) if t == "dog window"));
        assert!(matches!(&events[1], AppEvent::TextInput(t) if t.is_empty()));
        assert!(matches!(events[3], AppEvent::EndOfInput));
    }

    #[test]
    fn test_forward_lines_stops_when_session_is_gone() {
        let (tx, rx) = kanal::unbounded::<AppEvent>();
        drop(rx);
        // must return instead of blocking or panicking
        forward_lines("a\nb\n".as_bytes(), &tx);
    }
}
