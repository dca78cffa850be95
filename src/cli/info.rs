use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mm_spr::Spr;

use super::*;

use crate::modules::info::describe;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct InfoCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints the header and frame directory of a sprite
    Info {
        /// Path to .spr file
        path: PathBuf,
    },
}

pub struct Info;

impl Cli for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn cli(&self) -> CliRes {
        let cli = InfoCli::parse();

        let Commands::Info { path } = cli.command;

        match Spr::open_from_file(path.as_path()) {
            Ok(spr) => {
                print!("{}", describe(&spr));
                CliRes::Ok
            }
            Err(err) => {
                println!("Cannot open `{}`: {}", path.display(), err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        // handled by clap
        unreachable!()
    }
}
