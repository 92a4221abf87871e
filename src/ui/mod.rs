//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, statement input mode
//! - **[`panes`]**: render functions for each visible pane (source, trace,
//!   variables, terminal, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an [`Evaluator`] and
//! the script text, then call [`App::run`] to start the event loop.
//!
//! [`Evaluator`]: crate::interpreter::engine::Evaluator
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
