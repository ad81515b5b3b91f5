// crates/strip_ok_comments/src/lib.rs

pub mod config;
pub mod file_stripper;
pub mod runner;

pub use config::RunConfig;
pub use file_stripper::{DefaultFileStripper, FileStripper};
pub use runner::{run, run_with_stripper, FileFailure, FileOutcome, RunReport};
