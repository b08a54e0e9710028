use crate::presentation::view_models::{
    AreaListViewModel, CommandResultViewModel, Guidance, StatusBadge,
};
use mealdeck_types::Area;

pub fn present_area_list(areas: &[Area]) -> CommandResultViewModel<AreaListViewModel> {
    let content = AreaListViewModel {
        areas: areas.iter().map(|area| area.to_string()).collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    match areas.first() {
        None => result.with_badge(StatusBadge::warning("No areas available")),
        Some(first) => {
            result = result.with_badge(StatusBadge::success(format!("{} areas", areas.len())));
            result.with_suggestion(
                Guidance::new("List the meals of an area")
                    .with_command(format!("mealdeck area {}", first)),
            )
        }
    }
}
