use crate::presentation::view_models::{
    ListUpdate, LoadMoreViewModel, MealDetailViewModel, SummaryViewModel,
};

/// Controller → TUI updates, already converted to ViewModels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    List(ListUpdate),
    LoadMore(LoadMoreViewModel),
    Summary(SummaryViewModel),
    Areas(Vec<String>),
    Detail(MealDetailViewModel),
    ShowList,
    Loading(bool),
    Theme(bool),
    Alert(String),
}
