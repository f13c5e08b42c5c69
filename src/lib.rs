//! # Introduction
//!
//! lifetui runs Conway's Game of Life on a grid sized to the terminal
//! window. Each key press advances one generation and redraws; `q` quits.
//! The display is a fullscreen TUI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Terminal size → Grid (random seed) → evolve → draw → key press → …
//! ```
//!
//! 1. [`grid`] — the dense boolean [`grid::Grid`] and its random seeding.
//! 2. [`life`] — the evolution rule: [`life::live_neighbors`] counts the
//!    Moore neighborhood with hard (non-wrapping) boundaries, and
//!    [`life::evolve`] produces each next generation as a fresh grid.
//! 3. [`ui`] — ratatui-based TUI; [`ui::App`] owns the grid and the
//!    blocking key loop that paces the simulation.

pub mod grid;
pub mod life;
pub mod ui;
