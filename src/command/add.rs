use std::path::PathBuf;

use colored::Colorize;

use crate::cli::AddArgs;
use crate::command::fix::uncap_file;
use crate::error::Result;
use crate::ops::RewriteMode;
use crate::poetry;
use crate::validation;

pub fn execute(args: AddArgs) -> Result<()> {
    let pyproject_path = PathBuf::from("pyproject.toml");

    validation::preflight(&pyproject_path)?;

    println!("\nRunning poetry add\n");
    poetry::add(&args.packages)?;
    println!("\n{}", "poetry add complete".green());

    println!("\nRemoving caps from pyproject.toml file");
    uncap_file(
        &pyproject_path,
        &pyproject_path,
        RewriteMode::from_pin(args.pin),
        false,
    )?;

    println!("\nUpdating poetry.lock file\n");
    poetry::lock()?;
    println!("\n{}", "poetry lock complete".green());

    Ok(())
}
