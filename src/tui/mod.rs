//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the country
//! and attraction lists, and translates keyboard events into
//! `core::Action` values.
//!
//! The event loop is the single owner of the [`App`] state: background
//! fetch tasks never mutate it. They send actions over a channel, and the
//! loop drains that channel between draws, so every generation check and
//! slot write happens on one thread without locks.

mod event;
mod ui;

use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::fetch::aggregator::{Aggregator, Illustrated, Publication};
use crate::fetch::fetcher::ResourceFetcher;
use crate::fetch::model::{Attraction, Country};
use crate::fetch::transport::HttpTransport;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let transport = Arc::new(HttpTransport::new(config.request_timeout));
    let fetcher = Arc::new(ResourceFetcher::new(transport));
    let aggregator = Arc::new(Aggregator::new(fetcher.clone()));

    let mut app = App::new(config.endpoint.clone());
    let mut terminal = ratatui::init();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Initial load
    let effect = update(&mut app, Action::Refresh);
    handle_effect(effect, &mut app, &aggregator, &fetcher, &tx);

    loop {
        terminal.draw(|f| ui::draw_ui(f, &app))?;

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let first_event = poll_event_timeout(Duration::from_millis(100));
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match tui_event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
                TuiEvent::Refresh => Action::Refresh,
                TuiEvent::Up => Action::MoveUp,
                TuiEvent::Down => Action::MoveDown,
                TuiEvent::Open => Action::Open,
                TuiEvent::Back => Action::Back,
            };
            let effect = update(&mut app, action);
            if handle_effect(effect, &mut app, &aggregator, &fetcher, &tx) {
                should_quit = true;
            }
        }
        if should_quit {
            break;
        }

        // Handle background task actions (list results, image publications)
        while let Ok(action) = rx.try_recv() {
            debug!("event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(effect, &mut app, &aggregator, &fetcher, &tx) {
                should_quit = true;
            }
        }
        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Executes an effect from the reducer. Every effect that starts fetches
/// advances the generation first, superseding whatever is in flight.
/// Returns true when the loop should quit.
fn handle_effect(
    effect: Effect,
    app: &mut App,
    aggregator: &Arc<Aggregator>,
    fetcher: &Arc<ResourceFetcher>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::Quit => return true,
        Effect::None => {}
        Effect::LoadCountries => {
            app.generation = aggregator.advance();
            spawn_list_fetch(app.generation, app.endpoint.clone(), fetcher.clone(), tx.clone());
        }
        Effect::ResolveCountryImages => {
            let records: Vec<Country> =
                app.countries.iter().map(|s| s.record().clone()).collect();
            app.generation = aggregator.advance();
            dispatch_images(
                aggregator,
                app.generation,
                records,
                tx.clone(),
                Action::CountryCard,
            );
        }
        Effect::ResolveAttractionImages => {
            let records: Vec<Attraction> =
                app.attractions.iter().map(|s| s.record().clone()).collect();
            app.generation = aggregator.advance();
            dispatch_images(
                aggregator,
                app.generation,
                records,
                tx.clone(),
                Action::AttractionCard,
            );
        }
    }
    false
}

fn spawn_list_fetch(
    generation: u64,
    endpoint: String,
    fetcher: Arc<ResourceFetcher>,
    tx: mpsc::Sender<Action>,
) {
    info!("spawning list fetch (generation {generation})");
    tokio::spawn(async move {
        let result = fetcher.fetch_countries(&endpoint).await;
        if tx.send(Action::CountriesLoaded { generation, result }).is_err() {
            warn!("list result dropped: receiver gone");
        }
    });
}

/// Bridges the aggregator's async publication channel onto the event
/// loop's action channel.
fn dispatch_images<R: Illustrated>(
    aggregator: &Aggregator,
    generation: u64,
    records: Vec<R>,
    tx: mpsc::Sender<Action>,
    wrap: fn(Publication<R>) -> Action,
) {
    if records.is_empty() {
        return;
    }
    let (pub_tx, mut pub_rx) = tokio::sync::mpsc::channel(records.len());
    aggregator.resolve_images(generation, records, pub_tx);
    tokio::spawn(async move {
        while let Some(publication) = pub_rx.recv().await {
            if tx.send(wrap(publication)).is_err() {
                warn!("publication forward failed: receiver dropped");
                return;
            }
        }
    });
}
