#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod ops;
pub mod poetry;
pub mod validation;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use cli::UncapCommand;

    env_logger::init();

    let cli = cli::Cli::parse();
    match cli.command {
        UncapCommand::Add(args) => command::add::execute(args),
        UncapCommand::Fix(args) => command::fix::execute(args),
        UncapCommand::Update(args) => command::update::execute(args),
    }
}
