//! Core folio library (configuration and logging).

pub mod config;
pub mod logging;
