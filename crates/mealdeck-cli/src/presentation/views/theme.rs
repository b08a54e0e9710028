use std::fmt;

use crate::presentation::view_models::ThemeViewModel;

pub struct ThemeView<'a> {
    data: &'a ThemeViewModel,
}

impl<'a> ThemeView<'a> {
    pub fn new(data: &'a ThemeViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ThemeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mode = if self.data.dark_mode { "dark" } else { "light" };
        writeln!(f, "Theme: {}", mode)?;
        writeln!(f, "Stored in: {}", self.data.preferences_path)
    }
}
