use directories::UserDirs;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::commands::HEADING_GLOBAL;

use super::store::{self, ProfilesConfig};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to find home directory")]
    HomeDirNotFound,
    #[error("XDG_CONFIG_HOME env variable is not a valid path. Got {0}")]
    XdgConfigHome(String),
    #[error(transparent)]
    Store(#[from] store::Error),
}

#[derive(Debug, clap::Args, Default, Clone)]
#[group(skip)]
pub struct Args {
    /// Profile store file. Overrides `--config-dir`
    #[arg(long, global = true, env = "PERSONA_CONFIG_FILE", help_heading = HEADING_GLOBAL)]
    pub config_file: Option<PathBuf>,

    /// Directory holding `config.toml`. Default: `$XDG_CONFIG_HOME/persona` or `~/.config/persona`
    #[arg(long, global = true, env = "PERSONA_CONFIG_HOME", help_heading = HEADING_GLOBAL)]
    pub config_dir: Option<PathBuf>,
}

/// Where the profile store was found, for messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Explicit(PathBuf),
    Dir(PathBuf),
    Global(PathBuf),
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?}",
            match self {
                Location::Explicit(_) => "File",
                Location::Dir(_) => "Dir",
                Location::Global(_) => "Global",
            },
            self.as_ref()
        )
    }
}

impl AsRef<Path> for Location {
    fn as_ref(&self) -> &Path {
        match self {
            Location::Explicit(p) | Location::Dir(p) | Location::Global(p) => p.as_path(),
        }
    }
}

impl Args {
    pub fn location(&self) -> Result<Location, Error> {
        if let Some(file) = &self.config_file {
            return Ok(Location::Explicit(file.clone()));
        }
        if let Some(dir) = &self.config_dir {
            return Ok(Location::Dir(dir.join(CONFIG_FILE_NAME)));
        }
        Ok(Location::Global(
            global_config_path()?.join(CONFIG_FILE_NAME),
        ))
    }

    pub fn config_file(&self) -> Result<PathBuf, Error> {
        Ok(self.location()?.as_ref().to_path_buf())
    }

    pub fn read_profiles(&self) -> Result<ProfilesConfig, Error> {
        let location = self.location()?;
        let state = ProfilesConfig::read(location.as_ref())?;
        if let Some(name) = state.dangling_active() {
            tracing::warn!(
                "active profile {name:?} is not defined in {location}; treating it as unset"
            );
        }
        Ok(state)
    }

    pub fn write_profiles(&self, state: &ProfilesConfig) -> Result<PathBuf, Error> {
        let path = self.config_file()?;
        state.commit(&path)?;
        Ok(path)
    }
}

pub fn global_config_path() -> Result<PathBuf, Error> {
    let config_dir = if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from_str(&config_home).map_err(|_| Error::XdgConfigHome(config_home))?
    } else {
        UserDirs::new()
            .ok_or(Error::HomeDirNotFound)?
            .home_dir()
            .join(".config")
    };

    Ok(config_dir.join("persona"))
}
