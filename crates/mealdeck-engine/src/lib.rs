// Engine module - in-memory result set, paging and request bookkeeping
// This layer sits between fetched meals (providers) and the controller (runtime)

mod catalog;
mod generation;
mod pagination;
mod query;

pub use catalog::Catalog;
pub use generation::{Generation, RequestGeneration};
pub use pagination::{PAGE_SIZE, has_more, page_range};
pub use query::{FetchContext, sanitize_query};
