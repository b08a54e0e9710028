use anyhow::Result;

use crate::OutputFormat;
use crate::context::AppContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_theme;

/// Print the stored theme, or store a new one when `--dark`/`--light` is given
pub fn handle(ctx: &AppContext, dark: bool, light: bool, format: OutputFormat) -> Result<()> {
    let preferences = ctx.preferences();

    let requested = match (dark, light) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    if let Some(enabled) = requested {
        preferences.set_dark_mode(enabled)?;
        tracing::info!(dark_mode = enabled, "theme preference saved");
    }

    ConsoleRenderer::new(format).render(present_theme(
        preferences.dark_mode(),
        requested.is_some(),
        preferences.path(),
    ))
}
