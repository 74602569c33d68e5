//! Bridges a cell-addressed console grid with the system clipboard.
//!
//! The rendered grid keeps one addressable unit per character cell. This
//! crate reconstructs plain text from visual selections over that grid,
//! writes the result to the clipboard on copy, and forwards pasted text
//! to the host through an out-of-band relay; nothing the user types or
//! pastes ever mutates the grid directly.

pub mod bridge;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod grid;
pub mod relay;
pub mod selection;
