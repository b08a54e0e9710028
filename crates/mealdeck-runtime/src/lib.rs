pub mod action;
pub mod config;
pub mod controller;
pub mod error;
pub mod view;

pub use action::{Action, Screen};
pub use config::{ApiConfig, BrowseConfig, Config};
pub use controller::{
    AREAS_FAILED, Controller, DETAILS_FAILED, DETAILS_NOT_FOUND, failure_message, fetch_catalog,
};
pub use error::{Error, Result};
pub use view::{CatalogSummary, LoadMoreState, MealView};
