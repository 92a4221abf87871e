//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Script display with syntax highlighting and the selected line
//! - [`trace`]: Execution records, one per recognized statement
//! - [`variables`]: The session environment
//! - [`terminal`]: Output written by `println` and `print`
//! - [`status`]: Status bar with keybindings and the input line
//! - `formatting`: Shared value styling and scroll helpers
//!
//! Each pane module exports a primary `render_*` function that draws from
//! borrowed session state and updates only its own scroll offset.

mod formatting;

pub mod source;
pub mod status;
pub mod terminal;
pub mod trace;
pub mod variables;

pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use terminal::render_terminal_pane;
pub use trace::render_trace_pane;
pub use variables::render_variables_pane;
