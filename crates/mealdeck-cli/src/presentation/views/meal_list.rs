use std::fmt;

use crate::presentation::view_models::MealListViewModel;

pub struct MealListView<'a> {
    data: &'a MealListViewModel,
}

impl<'a> MealListView<'a> {
    pub fn new(data: &'a MealListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for MealListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        writeln!(f, "{} ({} of {})", summary.title, summary.shown, summary.total)?;
        writeln!(f)?;

        if let Some(message) = &self.data.empty_message {
            writeln!(f, "{}", message)?;
            return Ok(());
        }

        for card in &self.data.cards {
            writeln!(f, "  {:<8} {} [{}]", card.id, card.name, card.category)?;
        }

        Ok(())
    }
}
