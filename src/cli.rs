use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poetry-uncap", version, about = "Poetry add without upper bound caps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: UncapCommand,
}

#[derive(Subcommand)]
pub enum UncapCommand {
    /// Add new dependencies without upper bound caps.
    Add(AddArgs),

    /// Remove upper bound caps from pyproject.toml without adding any new
    /// dependencies.
    Fix(FixArgs),

    /// Update installed dependencies, keeping caps removed.
    Update(UpdateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Packages to add
    #[arg(required = true)]
    pub packages: Vec<String>,

    /// Pin dependencies to exact versions instead of minimums
    #[arg(long, short = 'p')]
    pub pin: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct FixArgs {
    /// Path to the pyproject.toml file (defaults to ./pyproject.toml)
    #[arg(long, value_name = "PATH")]
    pub pyproject_path: Option<PathBuf>,

    /// Where to write the result (defaults to the input path)
    #[arg(long, value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Print the modified pyproject.toml to stdout instead of saving it
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Pin dependencies to exact versions instead of minimums
    #[arg(long, short = 'p')]
    pub pin: bool,

    /// Do not refresh poetry.lock after rewriting
    #[arg(long)]
    pub skip_lock: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    /// Pin dependencies to exact versions instead of minimums
    #[arg(long, short = 'p')]
    pub pin: bool,
}
