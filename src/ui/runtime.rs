use std::sync::Arc;

use crate::config::Config;
use crate::effects::{EffectPipeline, Scheduler, SimulatedService};
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::store::{AppState, Store};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Wire store, effects and view together and run until the user quits.
///
/// Must run on a current-thread runtime: the store, the effect timers and
/// this loop share one cooperative scheduler.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let shutdown = ShutdownCoordinator::new();
    let signal_handle = shutdown.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_handle.signal();
        }
    });

    let store = Store::new(AppState::default(), config.ui.history_limit);
    let effects = EffectPipeline::new(
        store.clone(),
        Scheduler::new(),
        Arc::new(SimulatedService::new(config.effects.fail_every)),
    )
    .with_delay(config.effects.delay())
    .spawn();

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(store.clone());
    let mut events = EventHandler::new(config.ui.tick_rate(), shutdown.handle());
    let mut state_rx = store.watch();
    let shutdown_handle = shutdown.handle();

    tracing::info!(
        delay_ms = config.effects.delay_ms,
        fail_every = config.effects.fail_every,
        "Counter started"
    );

    loop {
        app.set_in_flight(effects.in_flight());
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                // Redraw happens at the top of the loop.
                Some(AppEvent::Tick) | Some(AppEvent::Resize(_, _)) => {}
                None => break,
            },
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = state_rx.borrow_and_update().clone();
                app.on_state(&state);
            }
            _ = shutdown_handle.wait() => break,
        }
    }

    shutdown.signal();
    shutdown.advance(ShutdownPhase::StoppingInput);
    drop(events);
    shutdown.advance(ShutdownPhase::StoppingEffects);
    effects.shutdown();
    shutdown.advance(ShutdownPhase::RestoringTerminal);
    drop(guard);
    shutdown.advance(ShutdownPhase::Complete);
    Ok(())
}
