//! Terminal Snake with static rocks and food that wanders or runs away.
//!
//! The simulation (`grid`, `snake`, `food`, `rocks`, `game`) is free of
//! terminal I/O and is driven one tick at a time; `driver`, `input`,
//! `renderer` and `ui` bind it to a crossterm/ratatui terminal.

pub mod config;
pub mod driver;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod rocks;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
