//! Mode handlers, one file per CLI mode.

mod download;
mod print_urls;

pub use download::run_download;
pub use print_urls::run_print;
