//! Shared rendering helpers used across features.

pub mod scrollbar;
pub mod text;
pub mod wrap;
