// crates/strip_ok_comments/src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use strip_marker::DEFAULT_ROOT;
use strip_ok_comments::{run, RunConfig};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "strip_ok_comments")]
#[command(version, about = "Removes bare `// ok` comment lines from *Input*.java files, in place", long_about = None)]
struct Cli {
    /// Directory to scan recursively
    #[arg(default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Also log skipped files and traversal details
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RunConfig::new(cli.root, cli.verbose);

    let level = if config.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let report = run(&config);
    if report.has_failures() {
        log::warn!(
            "{} path(s) under {} were left unprocessed",
            report.failures.len(),
            config.root_path.display()
        );
    }
    Ok(())
}
