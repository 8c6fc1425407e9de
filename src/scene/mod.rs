//! Boundary model: the per-render configuration document and the process-wide
//! color-scheme lookup table.

/// Render configuration and its closed enumerations.
pub mod config;
/// Color types and the fixed scheme table.
pub mod palette;
