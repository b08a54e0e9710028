use anyhow::{Context, Result, bail};
use mealdeck_providers::RecipeSource;
use mealdeck_runtime::{DETAILS_FAILED, DETAILS_NOT_FOUND};
use mealdeck_types::MealId;

use super::block_on;
use crate::OutputFormat;
use crate::context::AppContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_meal_detail_result;

pub fn handle(ctx: &AppContext, id: &str, format: OutputFormat) -> Result<()> {
    let source = ctx.recipe_source()?;
    let id = MealId::new(id.trim());

    let lookup = block_on(source.lookup(&id))?
        .inspect_err(|err| tracing::error!(%id, error = %err, "details request failed"))
        .context(DETAILS_FAILED)?;

    let Some(meal) = lookup else {
        tracing::info!(%id, "no meal with this id");
        bail!(DETAILS_NOT_FOUND);
    };

    ConsoleRenderer::new(format).render(present_meal_detail_result(&meal))
}
