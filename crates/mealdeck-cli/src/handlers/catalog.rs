use anyhow::{Context, Result};
use mealdeck_engine::{Catalog, FetchContext, sanitize_query};
use mealdeck_providers::RecipeSource;
use mealdeck_runtime::{AREAS_FAILED, failure_message, fetch_catalog};
use mealdeck_types::Area;

use super::block_on;
use crate::OutputFormat;
use crate::context::AppContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::{present_area_list, present_meal_list};

/// `mealdeck search <term>`; an empty term (after sanitizing) lists the
/// default browse set, the same fallback the interactive search uses.
pub fn search(ctx: &AppContext, term: &str, all: bool, format: OutputFormat) -> Result<()> {
    let term = sanitize_query(term);
    let context = if term.is_empty() {
        FetchContext::Browse {
            letter: ctx.config().browse.default_letter,
        }
    } else {
        FetchContext::Search { term: term.clone() }
    };

    let rerun = format!("mealdeck search {:?}", term);
    list(ctx, context, all, Some(&rerun), format)
}

/// Non-interactive `mealdeck`: the default browse set's first page. The bare
/// command has no `--all`, so no rerun hint is offered.
pub fn browse(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let context = FetchContext::Browse {
        letter: ctx.config().browse.default_letter,
    };
    list(ctx, context, false, None, format)
}

pub fn area(ctx: &AppContext, area: &str, all: bool, format: OutputFormat) -> Result<()> {
    let area = Area::new(area.trim());
    let rerun = format!("mealdeck area {}", area);
    list(ctx, FetchContext::Area { area }, all, Some(&rerun), format)
}

pub fn areas(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let source = ctx.recipe_source()?;
    let areas = block_on(source.list_areas())?
        .inspect_err(|err| tracing::error!(error = %err, "area list request failed"))
        .context(AREAS_FAILED)?;
    tracing::info!(count = areas.len(), "areas loaded");

    ConsoleRenderer::new(format).render(present_area_list(&areas))
}

fn list(
    ctx: &AppContext,
    context: FetchContext,
    all: bool,
    rerun: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let source = ctx.recipe_source()?;
    let meals = block_on(fetch_catalog(&source, &context))?
        .inspect_err(|err| tracing::error!(%context, error = %err, "catalog request failed"))
        .context(failure_message(&context))?;
    tracing::info!(%context, count = meals.len(), "catalog loaded");

    let mut catalog = Catalog::new(context.clone());
    catalog.replace(context, meals);

    ConsoleRenderer::new(format).render(present_meal_list(&catalog, all, rerun))
}
