use crate::presentation::view_models::{CommandResultViewModel, StatusBadge, ThemeViewModel};
use std::path::Path;

pub fn present_theme(
    dark_mode: bool,
    changed: bool,
    preferences_path: &Path,
) -> CommandResultViewModel<ThemeViewModel> {
    let content = ThemeViewModel {
        dark_mode,
        changed,
        preferences_path: preferences_path.display().to_string(),
    };

    let result = CommandResultViewModel::new(content);
    if changed {
        result.with_badge(StatusBadge::success("Theme preference saved"))
    } else {
        result
    }
}
