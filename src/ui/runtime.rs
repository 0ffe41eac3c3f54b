use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::trivia::TriviaClient;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    // Network I/O lives on a tokio runtime beside the synchronous UI loop;
    // resolved fetches come back through the shared event channel.
    let runtime = tokio::runtime::Runtime::new()?;
    let (command_tx, command_rx) = mpsc::channel(4);
    spawn_fetch_worker(&runtime, &config, command_rx, events.sender());

    let mut app = App::new(config);
    app.set_command_sender(command_tx);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::QuestionsFetched(result)) => app.on_questions_fetched(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    drop(guard);
    Ok(())
}

fn spawn_fetch_worker(
    runtime: &tokio::runtime::Runtime,
    config: &Config,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    let client = TriviaClient::new(&config.trivia);
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::FetchQuestions => {
                    let result = client.fetch_questions().await;
                    if events.send(AppEvent::QuestionsFetched(result)).is_err() {
                        break;
                    }
                }
            }
        }
    });
}
