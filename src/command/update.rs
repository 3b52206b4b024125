use std::path::PathBuf;

use colored::Colorize;

use crate::cli::UpdateArgs;
use crate::command::fix::uncap_file;
use crate::error::Result;
use crate::ops::RewriteMode;
use crate::poetry;
use crate::validation;

pub fn execute(args: UpdateArgs) -> Result<()> {
    let pyproject_path = PathBuf::from("pyproject.toml");
    let mode = RewriteMode::from_pin(args.pin);

    validation::preflight(&pyproject_path)?;

    // Uncap first so nothing is held back by a cap during the update.
    println!("\nRemoving caps from pyproject.toml file");
    uncap_file(&pyproject_path, &pyproject_path, mode, false)?;

    println!("\nRunning poetry update\n");
    poetry::update()?;
    println!("\n{}", "poetry update complete".green());

    // poetry update may have rewritten constraints with fresh caps.
    println!("\nRemoving caps from pyproject.toml file");
    uncap_file(&pyproject_path, &pyproject_path, mode, false)?;

    println!("\nUpdating poetry.lock file\n");
    poetry::lock()?;
    println!("\n{}", "poetry lock complete".green());

    Ok(())
}
