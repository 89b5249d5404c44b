use std::io::ErrorKind;
use std::process;

use clap::Parser;
use cli::{Args, Command};
use error::{NicmetaError, NicmetaResult};

mod cli;
mod commands;
mod error;
mod graph;
mod mapper;
mod normalize;
mod prelude;
mod progress;
mod record;
mod row;
mod table;
mod uri;
mod vocab;

fn run(args: Args) -> NicmetaResult<()> {
    match args.cmd {
        Command::Completions(cmd) => cmd.execute(),
        Command::Convert(cmd) => cmd.execute(),
    }
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(()) => process::exit(0),
        Err(NicmetaError::IO(e))
            if e.kind() == ErrorKind::BrokenPipe =>
        {
            process::exit(0)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}
