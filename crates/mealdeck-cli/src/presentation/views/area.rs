use std::fmt;

use crate::presentation::view_models::AreaListViewModel;

pub struct AreaListView<'a> {
    data: &'a AreaListViewModel,
}

impl<'a> AreaListView<'a> {
    pub fn new(data: &'a AreaListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AreaListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for area in &self.data.areas {
            writeln!(f, "{}", area)?;
        }
        Ok(())
    }
}
