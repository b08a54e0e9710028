//! # Presentation Layer
//!
//! ```text
//! [ Handler / Controller ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ]
//!                                                                   |-- Console: JSON or View (Display)
//!                                                                   `-- TUI: AppState + widgets
//! ```
//!
//! - `view_models/`: plain `Serialize` data. No formatting, no styling.
//! - `presenters/`: pure functions from domain data to ViewModels. Decides
//!   placeholders ("N/A"), which ingredient rows exist, which links show.
//! - `views/`: `fmt::Display` layouts for the console and ratatui widgets for
//!   the TUI. Layout and colour only.
//! - `renderers/`: drivers. The console renderer prints one command result;
//!   the TUI renderer owns the terminal, routes keys to actions and applies
//!   events from the controller to its state.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, TuiMealView, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView};
