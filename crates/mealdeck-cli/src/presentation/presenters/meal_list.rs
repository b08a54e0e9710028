use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ListUpdate, LoadMoreViewModel, MealCardViewModel,
    MealListViewModel, NO_RESULTS, StatusBadge, SummaryViewModel,
};
use mealdeck_engine::Catalog;
use mealdeck_runtime::{CatalogSummary, LoadMoreState};
use mealdeck_types::Meal;

/// Shown when a meal carries no category
pub const CATEGORY_PLACEHOLDER: &str = "N/A";

pub fn present_meal_card(meal: &Meal) -> MealCardViewModel {
    MealCardViewModel {
        id: meal.id.to_string(),
        name: meal.name.clone(),
        thumbnail: meal.thumbnail.clone(),
        category: meal
            .category
            .clone()
            .unwrap_or_else(|| CATEGORY_PLACEHOLDER.to_string()),
    }
}

/// A page of meals as a list render step
pub fn present_meal_page(meals: &[Meal], append: bool) -> ListUpdate {
    let cards = meals.iter().map(present_meal_card).collect();
    if append {
        ListUpdate::Append(cards)
    } else {
        ListUpdate::Replace(cards)
    }
}

pub fn present_load_more(state: LoadMoreState) -> LoadMoreViewModel {
    match state {
        LoadMoreState::Hidden => LoadMoreViewModel::Hidden,
        LoadMoreState::Ready => LoadMoreViewModel::Ready,
        LoadMoreState::Busy => LoadMoreViewModel::Busy,
    }
}

pub fn present_summary(summary: &CatalogSummary) -> SummaryViewModel {
    SummaryViewModel {
        title: summary.title.clone(),
        shown: summary.shown,
        total: summary.total,
    }
}

/// Console listing of a catalog: the first page, or every meal with `all`.
/// The `--all` hint needs a `rerun` command that accepts the flag.
pub fn present_meal_list(
    catalog: &Catalog,
    all: bool,
    rerun: Option<&str>,
) -> CommandResultViewModel<MealListViewModel> {
    let meals = if all {
        catalog.meals()
    } else {
        catalog.current_page()
    };

    let mut content = MealListViewModel {
        summary: SummaryViewModel {
            title: catalog.context().to_string(),
            shown: meals.len(),
            total: catalog.len(),
        },
        load_more: if !all && catalog.has_more() {
            LoadMoreViewModel::Ready
        } else {
            LoadMoreViewModel::Hidden
        },
        ..Default::default()
    };
    content.apply(present_meal_page(meals, false));

    let total = catalog.len();
    let mut result = CommandResultViewModel::new(content);
    if total == 0 {
        result = result.with_badge(StatusBadge::info(NO_RESULTS));
    } else {
        let label = if total == 1 {
            "1 meal found".to_string()
        } else {
            format!("{} meals found", total)
        };
        result = result.with_badge(StatusBadge::success(label));

        if !all
            && catalog.has_more()
            && let Some(rerun) = rerun
        {
            result = result.with_suggestion(
                Guidance::new(format!(
                    "Showing the first {} of {} meals, use --all to see every one",
                    meals.len(),
                    total
                ))
                .with_command(format!("{} --all", rerun)),
            );
        }
        result = result.with_suggestion(
            Guidance::new("Open a recipe").with_command(format!("mealdeck show {}", meals[0].id)),
        );
    }

    result
}
