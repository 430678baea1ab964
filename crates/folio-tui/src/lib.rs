//! Full-screen terminal portfolio for folio.

pub mod anim;
pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod sink;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, Write, stderr};
use std::sync::Arc;

use anyhow::Result;
pub use features::{notice, page, sections, statusline};
use folio_core::config::Config;
pub use runtime::TuiRuntime;
pub use sink::{LogSink, MessageSink, OutboundMessage};

/// Runs the portfolio with the default log-only delivery sink.
pub fn run_portfolio(config: &Config) -> Result<()> {
    run_portfolio_with_sink(config, Arc::new(LogSink))
}

/// Runs the portfolio with a custom delivery sink.
pub fn run_portfolio_with_sink(config: &Config, sink: Arc<dyn MessageSink>) -> Result<()> {
    // The portfolio requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!("folio needs an interactive terminal to render.");
    }

    let mut runtime = TuiRuntime::new(config.clone(), sink)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
