use std::{
    fs::{self, create_dir_all},
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::Profile;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read profile store {path}: {error}")]
    FileRead { path: PathBuf, error: io::Error },
    #[error("Failed to write profile store {path}: {error}")]
    FileWrite { path: PathBuf, error: io::Error },
    #[error("Failed to create directory: {path:?}")]
    DirCreationFailed { path: PathBuf },
    #[error("Profile store {path} failed to deserialize: {error}")]
    Deserialization {
        path: PathBuf,
        error: toml::de::Error,
    },
    #[error(transparent)]
    Serialization(#[from] toml::ser::Error),
    #[error("Profile {0} cannot be empty")]
    EmptyField(&'static str),
    #[error("Profile '{0}' already exists")]
    AlreadyExists(String),
    #[error("Profile '{name}' not found.{}", available_list(.available))]
    NotFound { name: String, available: Vec<String> },
    #[error("Cannot delete active profile '{0}'. Switch to another profile first.")]
    DeleteActive(String),
    #[error("No profiles found. Run `persona add` first.")]
    NoProfiles,
}

fn available_list(names: &[String]) -> String {
    if names.is_empty() {
        return " No profiles exist yet.".to_string();
    }
    let mut list = "\nAvailable profiles:".to_string();
    for name in names {
        list.push_str("\n  - ");
        list.push_str(name);
    }
    list
}

/// Everything persisted in the profile store file.
///
/// The file is read whole at the start of a command and rewritten whole when
/// a command mutates it. Profiles keep the order in which they were added.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct ProfilesConfig {
    #[serde(default)]
    pub active_profile: String,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl ProfilesConfig {
    /// Reads the store at `path`. A missing file is an empty store.
    pub fn read(path: &Path) -> Result<Self, Error> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no profile store at {path:?}, starting empty");
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(Error::FileRead {
                    path: path.to_path_buf(),
                    error,
                })
            }
        };
        tracing::debug!("reading profile store {path:?}");
        toml::from_str(&data).map_err(|error| Error::Deserialization {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Overwrites the store at `path`, creating parent directories as needed.
    pub fn commit(&self, path: &Path) -> Result<(), Error> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                create_dir_all(dir).map_err(|_| Error::DirCreationFailed {
                    path: dir.to_path_buf(),
                })?;
            }
        }
        let data = toml::to_string(self)?;
        tracing::debug!("writing profile store {path:?}");
        fs::write(path, data).map_err(|error| Error::FileWrite {
            path: path.to_path_buf(),
            error,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Like [`ProfilesConfig::get`], failing with the list of known names.
    pub fn find(&self, name: &str) -> Result<&Profile, Error> {
        self.get(name).ok_or_else(|| self.not_found(name))
    }

    pub fn not_found(&self, name: &str) -> Error {
        Error::NotFound {
            name: name.to_string(),
            available: self.names(),
        }
    }

    pub fn is_active(&self, name: &str) -> bool {
        !self.active_profile.is_empty() && self.active_profile == name
    }

    /// The active profile, if the reference names a stored profile.
    pub fn active(&self) -> Option<&Profile> {
        if self.active_profile.is_empty() {
            return None;
        }
        self.get(&self.active_profile)
    }

    /// The active reference when it names no stored profile.
    pub fn dangling_active(&self) -> Option<&str> {
        if self.active_profile.is_empty() || self.active().is_some() {
            None
        } else {
            Some(&self.active_profile)
        }
    }

    /// Active name to pin in the selector; empty when the reference dangles.
    pub fn active_name(&self) -> &str {
        self.active().map_or("", |p| p.name.as_str())
    }

    pub fn add(&mut self, profile: Profile) -> Result<(), Error> {
        if let Some(field) = profile.missing_field() {
            return Err(Error::EmptyField(field));
        }
        if self.get(&profile.name).is_some() {
            return Err(Error::AlreadyExists(profile.name));
        }
        self.profiles.push(profile);
        Ok(())
    }

    /// Replaces the profile called `target` in place.
    ///
    /// Renaming onto a name held by another profile fails. When the active
    /// profile is renamed, the active reference follows it.
    pub fn edit(&mut self, target: &str, profile: Profile) -> Result<(), Error> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.name == target)
            .ok_or_else(|| self.not_found(target))?;
        if let Some(field) = profile.missing_field() {
            return Err(Error::EmptyField(field));
        }
        if profile.name != target && self.get(&profile.name).is_some() {
            return Err(Error::AlreadyExists(profile.name));
        }
        if self.is_active(target) {
            self.active_profile.clone_from(&profile.name);
        }
        self.profiles[index] = profile;
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<Profile, Error> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| self.not_found(name))?;
        if self.is_active(name) {
            return Err(Error::DeleteActive(name.to_string()));
        }
        Ok(self.profiles.remove(index))
    }

    /// Profiles that [`ProfilesConfig::delete`] would accept.
    pub fn deletable(&self) -> Vec<Profile> {
        self.profiles
            .iter()
            .filter(|p| !self.is_active(&p.name))
            .cloned()
            .collect()
    }

    pub fn set_active(&mut self, name: &str) -> Result<&Profile, Error> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| self.not_found(name))?;
        self.active_profile = name.to_string();
        Ok(&self.profiles[index])
    }
}
