#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod ops;
pub mod registry;
pub mod validation;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::RenameCli::parse();
    command::rename::execute(cli)
}
