//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, TileState, run_tui};
