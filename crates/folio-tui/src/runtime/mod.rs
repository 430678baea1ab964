//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async results (currently only message delivery) arrive via an inbox
//! channel. The runtime drains `inbox_rx` each iteration, so the reducer
//! sees a delivery outcome as just another event.
//!
//! ## Poll Cadence
//!
//! The loop polls fast (60fps) only while something is actually moving:
//! the hero typewriter, an entrance animation that recently fired, or the
//! user interacting. Otherwise it drops to a slow idle poll to save CPU.

mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use folio_core::config::Config;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::sink::MessageSink;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate for animation updates (60fps = ~16ms per frame).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle (nothing animating, no recent input).
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// How long after a section reveal its entrance animations keep moving.
/// Covers the longest stagger-plus-fill chain with margin.
const REVEAL_SETTLE: Duration = Duration::from_millis(2500);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop, panic, or Ctrl+C.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    /// Delivery collaborator for submitted contact messages.
    sink: Arc<dyn MessageSink>,
    /// Inbox sender - background work sends events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each iteration.
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a render occurred (for FPS calculation).
    last_render: Instant,
    /// Last time a terminal event was received (for fast polling during interaction).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// The sink receives every validated contact submission; the reducer
    /// never sees it.
    pub fn new(config: Config, sink: Arc<dyn MessageSink>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        // Enter alternate screen and raw mode
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config);

        // Create inbox channel for async event collection
        let (inbox_tx, inbox_rx) = inbox::channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            sink,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_render: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        // Enable bracketed paste, and mouse capture when configured
        terminal::enable_input_features(self.state.tui.config.mouse)?;

        let result = self.event_loop();

        // Disable mouse capture and bracketed paste
        let _ = terminal::disable_input_features();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            // Collect events from the terminal and the inbox
            let mut events = self.collect_events()?;

            // Prepend Frame event with current terminal size.
            // This ensures layout and observation run before other events.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            // Process each event through the reducer
            for event in events {
                // Track terminal activity for fast poll mode
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers render - this caps frame rate at tick cadence.
                // Terminal events update state but batch renders to next Tick.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            // Only render if something changed
            if dirty {
                // Measure time since last render (actual frame interval for FPS)
                let frame_ms = self.last_render.elapsed().as_millis() as u16;
                self.last_render = Instant::now();

                // Render - state is a separate field, no borrow conflict
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;

                dirty = false;

                // Update FPS based on actual render interval
                self.state.tui.status_line.on_frame(frame_ms);
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from all sources (terminal, inbox).
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling only while something moves on screen:
        // - Hero typewriter still has characters to place
        // - A revealed section's entrance animations are still settling
        // - Recent terminal activity (scrolling, typing)
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.page.hero.is_typing()
            || self.state.tui.page.observer.any_settling(REVEAL_SETTLE)
            || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Calculate time until next tick for poll duration.
        // This ensures we wake up exactly when Tick is due.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        // Poll terminal events:
        // - If we already have events to process, do non-blocking poll (don't delay rendering)
        // - Otherwise, block until next tick is due (keeps input responsive while hitting tick cadence)
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        // Emit Tick after poll - we've now waited until the tick interval elapsed
        // (or woke early due to terminal input, in which case we check again)
        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    /// Executes effects returned by the reducer.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect, posting the resulting event into the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    /// Executes a single effect.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::OpenBrowser { url } => {
                let _ = open::that(&url);
            }
            UiEffect::DeliverMessage { message } => {
                let sink = Arc::clone(&self.sink);
                self.spawn_effect(move || async move {
                    let result = sink.deliver(&message);
                    UiEvent::DeliveryDone {
                        error: result.err().map(|err| format!("{err:#}")),
                    }
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
