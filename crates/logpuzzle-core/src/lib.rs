pub mod config;
pub mod logging;

pub mod download;
pub mod extract;
pub mod fetch;
