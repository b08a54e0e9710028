// NOTE: mealdeck layering
//
// types → core → providers → engine → runtime → this crate.
// The runtime controller owns every piece of browse state and talks to a
// `MealView`; this crate supplies the two surfaces (ratatui TUI, plain
// console) plus argument parsing and logging. Presenters here are pure
// functions from domain data to ViewModels, so everything a surface draws can
// also be dumped as JSON.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
