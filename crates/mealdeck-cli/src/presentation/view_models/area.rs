use serde::Serialize;

use super::CreateView;
use crate::presentation::views::AreaListView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaListViewModel {
    pub areas: Vec<String>,
}

impl CreateView for AreaListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn std::fmt::Display + 'a> {
        Box::new(AreaListView::new(self))
    }
}
