use std::rc::Rc;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::country::{GraphqlCountryClient, TokioFetcher};
use crate::nav::Route;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive explorer until the user quits.
///
/// Network calls run on a tokio runtime owned by this function; all UI
/// state stays on the calling thread.
pub fn run(config: &Config, initial: Route) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = Arc::new(
        GraphqlCountryClient::new(&config.api).context("failed to build HTTP client")?,
    );
    info!(endpoint = %client.endpoint(), "country client ready");

    let events = EventHandler::new();
    let fetcher = Rc::new(TokioFetcher::new(
        client,
        runtime.handle().clone(),
        events.sender(),
    ));

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let mut app = App::new(config, fetcher, initial);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let interval = app.tick_interval();
        let timeout = interval.saturating_sub(last_tick.elapsed());
        let was_animating = app.is_animating();

        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                info!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::FetchResolved(outcome)) => app.on_fetch_outcome(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        // First frame of a new flip starts from zero elapsed time.
        if !was_animating && app.is_animating() {
            last_tick = Instant::now();
        }
        if last_tick.elapsed() >= app.tick_interval() {
            app.on_tick(last_tick.elapsed());
            last_tick = Instant::now();
        }
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
