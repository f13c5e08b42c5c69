//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! Two layers:
//!
//! - **[`app`]** — application state and the key-driven generation loop
//! - **[`board`]** — stateless renderer drawing the grid's live cells
//!
//! The entry point for consumers is [`App`]: construct it with a seeded
//! [`Grid`] and call [`App::run`] to start the loop.
//!
//! [`Grid`]: crate::grid::Grid
//! [`App::run`]: app::App::run

pub mod app;
pub mod board;

pub use app::App;
