use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::trivia::{Question, TriviaError};

pub enum AppEvent {
    /// Key press from the player.
    Input(KeyEvent),
    /// Fixed-period heartbeat; drives the countdown, the reveal delay, and
    /// the splash timeout.
    Tick,
    /// Terminal resize; ratatui re-lays out on the next draw.
    Resize,
    /// The question fetch resolved on the async side.
    QuestionsFetched(Result<Vec<Question>, TriviaError>),
}

/// Input/tick pump on a dedicated thread, multiplexed with async fetch
/// results over one channel so the UI loop has a single event source.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(_, _)) => {
                            if event_tx.send(AppEvent::Resize).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Clone of the channel sender, handed to the fetch worker so resolved
    /// requests arrive in the same queue as input and ticks.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
