pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{DEFAULT_HISTORY_DIR, HISTORY_BASE_VAR, get_history_base_dir};
pub use paths::{add_leading_slash, resolve_search_root};
pub use terminal::strip_ansi_codes;
