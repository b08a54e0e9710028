pub mod browse;
pub mod catalog;
pub mod show;
pub mod theme;

use anyhow::Result;
use std::future::Future;

/// Console commands make one or two requests; a current-thread runtime per
/// invocation is enough.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
