use crate::FetchContext;
use crate::pagination::{has_more, page_range};
use mealdeck_types::Meal;

/// The current result set and how much of it has been revealed.
///
/// `replace` is the only way to change the meals, `advance` the only way to
/// move the cursor forward. The cursor never points past the last page, so
/// `cursor * PAGE_SIZE <= len` always holds.
#[derive(Debug, Clone)]
pub struct Catalog {
    context: FetchContext,
    meals: Vec<Meal>,
    cursor: usize,
}

impl Catalog {
    pub fn new(context: FetchContext) -> Self {
        Self {
            context,
            meals: Vec::new(),
            cursor: 0,
        }
    }

    /// Swap in a new result set and rewind to the first page
    pub fn replace(&mut self, context: FetchContext, meals: Vec<Meal>) {
        self.context = context;
        self.meals = meals;
        self.cursor = 0;
    }

    /// Meals of the page under the cursor (at most `PAGE_SIZE`)
    pub fn current_page(&self) -> &[Meal] {
        &self.meals[page_range(self.meals.len(), self.cursor)]
    }

    /// Move to the next page if there is one; returns whether it moved
    pub fn advance(&mut self) -> bool {
        if self.has_more() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn has_more(&self) -> bool {
        has_more(self.meals.len(), self.cursor)
    }

    /// Every meal up to and including the current page
    pub fn revealed(&self) -> &[Meal] {
        &self.meals[..page_range(self.meals.len(), self.cursor).end]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn context(&self) -> &FetchContext {
        &self.context
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
