use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
    /// No input arrived within one poll interval.
    Tick,
}

pub struct EventHandler {
    rx: Receiver<io::Result<AppEvent>>,
}

impl EventHandler {
    /// Spawn the input thread. It polls crossterm every `poll_interval`,
    /// forwards a terminal error as its last message, and exits once the
    /// handler is dropped.
    pub fn new(poll_interval: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || loop {
                let forwarded = match event::poll(poll_interval) {
                    Ok(false) => Ok(AppEvent::Tick),
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => Ok(AppEvent::Key(key)),
                        Ok(Event::Resize(_, _)) => Ok(AppEvent::Resize),
                        Ok(_) => continue,
                        Err(err) => Err(err),
                    },
                    Err(err) => Err(err),
                };
                let failed = forwarded.is_err();
                if tx.send(forwarded).is_err() || failed {
                    break;
                }
            })?;

        Ok(Self { rx })
    }

    /// Block until the next event.
    ///
    /// Errors if the terminal failed or the input thread is gone.
    pub fn next(&self) -> io::Result<AppEvent> {
        match self.rx.recv() {
            Ok(event) => event,
            Err(mpsc::RecvError) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal input thread stopped",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_events_in_order() {
        let (tx, rx) = mpsc::channel();
        tx.send(Ok(AppEvent::Tick)).unwrap();
        tx.send(Ok(AppEvent::Resize)).unwrap();
        let events = EventHandler { rx };

        assert!(matches!(events.next(), Ok(AppEvent::Tick)));
        assert!(matches!(events.next(), Ok(AppEvent::Resize)));
    }

    #[test]
    fn terminal_error_is_reported() {
        let (tx, rx) = mpsc::channel();
        tx.send(Err(io::Error::other("poll failed"))).unwrap();
        drop(tx);
        let events = EventHandler { rx };

        let err = events.next().unwrap_err();
        assert_eq!(err.to_string(), "poll failed");
    }

    #[test]
    fn stopped_input_thread_is_an_error() {
        let (tx, rx) = mpsc::channel::<io::Result<AppEvent>>();
        drop(tx);
        let events = EventHandler { rx };

        let err = events.next().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
