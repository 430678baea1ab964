//! Terminal lifecycle management.
//!
//! Setup, restore, and the panic hook. Terminal state is guaranteed to be
//! restored on normal exit (via Drop), Ctrl+C, and panic.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Sets up the terminal for the TUI.
///
/// Enables raw mode, enters the alternate screen, and creates the terminal
/// instance. Call [`install_panic_hook`] before this so a panic during
/// setup still restores the terminal.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Enables input features for the event loop.
///
/// Bracketed paste is always on; mouse capture only when configured. These
/// are separate from [`setup_terminal`] because normal exit paths disable
/// them before restoring, while [`restore_terminal`] also disables them to
/// cover panic and Ctrl+C.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn enable_input_features(mouse: bool) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnableBracketedPaste).context("Failed to enable bracketed paste")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    Ok(())
}

/// Disables the features enabled by [`enable_input_features`].
///
/// Safe to call even when mouse capture was never enabled.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn disable_input_features() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste)
        .context("Failed to disable input features")?;
    Ok(())
}

/// Restores terminal state.
///
/// Disables mouse capture and bracketed paste (safe even if not enabled),
/// leaves the alternate screen, and disables raw mode. Idempotent.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn restore_terminal() -> Result<()> {
    // Input features must be disabled before leaving raw mode
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);

    // Leave alternate screen (while still in raw mode)
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
///
/// Call this BEFORE `setup_terminal()` to ensure terminal restore on panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal first (includes mouse/paste cleanup)
        let _ = restore_terminal();
        // Then call the original panic hook
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    // Terminal tests need a real TTY, so these guarantees are checked
    // manually: restore on normal exit, on panic, and on Ctrl+C, with mouse
    // capture and bracketed paste disabled on every exit path.
}
