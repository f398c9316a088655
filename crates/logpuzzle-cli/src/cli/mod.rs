//! CLI for the logpuzzle extractor/downloader.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use logpuzzle_core::{config, extract};
use std::path::PathBuf;

use commands::{run_download, run_print};

/// Extract puzzle image URLs from an Apache access log; print them, or
/// download the images with `--todir`.
#[derive(Debug, Parser)]
#[command(name = "logpuzzle")]
#[command(about = "Extract and download puzzle images from an Apache access log", long_about = None)]
pub struct Cli {
    /// Apache access log to scan.
    pub logfile: PathBuf,

    /// Destination directory for the images; omit to print the URLs instead.
    #[arg(short = 'd', long = "todir", value_name = "DIR")]
    pub todir: Option<PathBuf>,
}

impl Cli {
    /// Parses the process arguments and runs the selected mode.
    ///
    /// A bare invocation (no arguments at all) prints the usage line and
    /// exits with status 1 instead of going through clap's
    /// missing-argument error.
    pub fn run_from_args() -> Result<()> {
        if std::env::args_os().len() < 2 {
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }

        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let urls = extract::extract_urls(&cli.logfile)?;
        match cli.todir {
            Some(dir) => run_download(&urls, &dir, &cfg)?,
            None => run_print(&urls),
        }

        Ok(())
    }
}
