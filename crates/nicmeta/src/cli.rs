use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None, max_term_width = 72)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) cmd: Command,
}

use crate::commands::*;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    Completions(Completions),
    Convert(Convert),
}
