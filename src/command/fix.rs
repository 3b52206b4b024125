use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::FixArgs;
use crate::error::Result;
use crate::ops::{self, RewriteMode};
use crate::poetry;
use crate::validation::ensure_poetry_project;

pub fn execute(args: FixArgs) -> Result<()> {
    let pyproject_path = args
        .pyproject_path
        .unwrap_or_else(|| PathBuf::from("pyproject.toml"));
    let output_path = args
        .output_path
        .unwrap_or_else(|| pyproject_path.clone());

    let count = uncap_file(
        &pyproject_path,
        &output_path,
        RewriteMode::from_pin(args.pin),
        args.dry_run,
    )?;

    if args.dry_run {
        return Ok(());
    }

    if count == 0 {
        println!("{}", "No caret constraints found".yellow());
        return Ok(());
    }

    // Refreshing the lock only makes sense when the project manifest itself
    // was rewritten, not a copy at a different output path.
    if !args.skip_lock && output_path == pyproject_path {
        println!("\nUpdating poetry.lock file\n");
        poetry::lock()?;
        println!("\n{}", "poetry lock complete".green());
    }

    println!(
        "{} Removed caps from {} constraint(s)",
        "✓".green().bold(),
        count.to_string().green()
    );

    Ok(())
}

/// Loads, rewrites and persists one pyproject file.
///
/// Shared by every subcommand. In dry-run mode the transformed document goes
/// to stdout and nothing is written. Returns the number of rewritten
/// constraints.
pub(crate) fn uncap_file(
    pyproject_path: &Path,
    output_path: &Path,
    mode: RewriteMode,
    dry_run: bool,
) -> Result<usize> {
    let mut doc = ops::load(pyproject_path)?;
    ensure_poetry_project(&doc, pyproject_path)?;

    let count = ops::uncap_document(&mut doc, mode);
    log::info!(
        "Rewrote {} constraint(s) in {}",
        count,
        pyproject_path.display()
    );

    if dry_run {
        print!("{doc}");
        return Ok(count);
    }

    ops::save(&doc, output_path)?;
    Ok(count)
}
