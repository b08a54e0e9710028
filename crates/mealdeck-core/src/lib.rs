mod error;
mod path;
mod preferences;

pub use error::{Error, Result};
pub use path::{DATA_DIR_ENV, expand_tilde, resolve_data_dir};
pub use preferences::{DARK_MODE_KEY, PREFERENCES_FILE, PreferenceStore};
