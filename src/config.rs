//! Parses config file
use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use mm_spr::Limits;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Where exported frames go when no output folder is given.
    pub out_dir: Option<String>,
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    pub max_pixels: Option<u64>,
}

impl Config {
    pub fn limits(&self) -> Limits {
        Limits {
            max_width: self.max_width,
            max_height: self.max_height,
            max_pixels: self.max_pixels,
        }
    }
}

pub static CONFIG_FILE_NAME: &str = "config.toml";

/// Parse `config.toml` in the same folder as the binary
///
/// No file means default config.
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    parse_config_from_str(&buffer)
}

pub fn parse_config_from_str(s: &str) -> eyre::Result<Config> {
    let config: Config = toml::from_str(s)?;

    Ok(config)
}
