use super::args::{Cli, Commands};
use super::handlers;
use crate::context::AppContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::load(cli.data_dir.as_deref(), cli.base_url.as_deref())?;

    let Some(command) = cli.command else {
        return handlers::browse::handle(&ctx, cli.log_level, cli.format);
    };

    if !matches!(command, Commands::Browse) {
        logging::init_stderr(cli.log_level);
    }

    match command {
        Commands::Browse => handlers::browse::handle(&ctx, cli.log_level, cli.format),
        Commands::Search { term, all } => handlers::catalog::search(&ctx, &term, all, cli.format),
        Commands::Area { area, all } => handlers::catalog::area(&ctx, &area, all, cli.format),
        Commands::Areas => handlers::catalog::areas(&ctx, cli.format),
        Commands::Show { id } => handlers::show::handle(&ctx, &id, cli.format),
        Commands::Theme { dark, light } => handlers::theme::handle(&ctx, dark, light, cli.format),
    }
}
