//! Testing infrastructure for mealdeck tests.
//!
//! - `FakeRecipeSource`: scripted in-memory `RecipeSource` with failure
//!   injection, call recording and per-call delays
//! - `RecordingView`: `MealView` that records every surface update
//! - `fixtures`: meal and area builders plus recorded API bodies
//! - `StubApi`: local HTTP responder serving recorded API bodies
//! - `TestWorld`: isolated data directory and a configured CLI command

pub mod fixtures;
pub mod source;
pub mod stub;
pub mod view;
pub mod world;

pub use source::{Call, FakeRecipeSource};
pub use stub::StubApi;
pub use view::{RecordingView, ViewCall};
pub use world::{CliResult, TestWorld};
