use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;

pub fn run(path: &Path, force: bool) -> Result<()> {
    Config::create_default_config(path, force)?;

    println!("{} Created {}", "✓".green(), path.display());
    println!("Fill in the [google] and [slack] sections, then run `phstatus check --dry-run`.");

    Ok(())
}
