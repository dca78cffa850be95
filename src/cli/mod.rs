use std::path::Path;

use crate::config::{parse_config, parse_config_from_file, Config};

use self::{export::Export, info::Info};

mod export;
mod info;

pub enum CliRes {
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// `args[1]` is the name of the module.
    ///
    /// Each module has to handle the arguments by itself.
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

/// Runs command-line options
pub fn cli() -> CliRes {
    // Add new modules here.
    let modules: &[&dyn Cli] = &[&Info, &Export];

    let args: Vec<String> = std::env::args().collect();

    let help = || {
        println!(
            "\
mmspr

Available modules:"
        );
        for module in modules {
            println!("{}", module.name());
        }
    };

    if args.len() < 2 {
        help();
        return CliRes::Ok;
    }

    for module in modules {
        if args[1] == module.name() {
            return module.cli();
        }
    }

    // In case nothing fits then prints this again.
    help();

    CliRes::Err
}

fn load_config(path: Option<&Path>) -> eyre::Result<Config> {
    match path {
        Some(path) => parse_config_from_file(path),
        None => parse_config(),
    }
}
