use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;
use mealdeck_runtime::Controller;
use std::sync::Arc;
use std::sync::mpsc;

use super::{block_on, catalog};
use crate::context::AppContext;
use crate::presentation::{TuiMealView, TuiRenderer};
use crate::{LogLevel, OutputFormat, logging};

pub fn handle(ctx: &AppContext, log_level: LogLevel, format: OutputFormat) -> Result<()> {
    // Auto-select TUI mode if stdout is a TTY
    if format == OutputFormat::Json || !std::io::stdout().is_terminal() {
        logging::init_stderr(log_level);
        return catalog::browse(ctx, format);
    }

    logging::init_file(log_level, &ctx.log_path())?;
    tracing::info!(data_dir = %ctx.data_dir().display(), "browse session started");

    let source = Arc::new(ctx.recipe_source()?);
    let (event_tx, event_rx) = mpsc::channel();
    let (action_tx, action_rx) = tokio::sync::mpsc::unbounded_channel();

    let controller = Controller::new(
        source,
        TuiMealView::new(event_tx),
        ctx.preferences(),
        ctx.config().browse.clone(),
    );

    let surface = std::thread::spawn(move || TuiRenderer::run(event_rx, action_tx));

    let outcome = block_on(controller.run(action_rx));

    let surface = surface
        .join()
        .map_err(|_| anyhow!("terminal thread panicked"))?;

    tracing::info!("browse session ended");
    surface?;
    outcome??;
    Ok(())
}
