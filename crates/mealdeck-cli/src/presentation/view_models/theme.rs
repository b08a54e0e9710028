use serde::Serialize;

use super::CreateView;
use crate::presentation::views::ThemeView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeViewModel {
    pub dark_mode: bool,
    /// Whether this invocation wrote the preference
    pub changed: bool,
    pub preferences_path: String,
}

impl CreateView for ThemeViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn std::fmt::Display + 'a> {
        Box::new(ThemeView::new(self))
    }
}
