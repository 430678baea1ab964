//! Runtime execution modes.
//!
//! The portfolio only has one mode, the full-screen TUI, but it stays
//! behind the `tui` feature so a headless build still compiles the
//! config commands.

#[cfg(feature = "tui")]
pub use folio_tui::run_portfolio;

#[cfg(not(feature = "tui"))]
pub fn run_portfolio(_config: &folio_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
