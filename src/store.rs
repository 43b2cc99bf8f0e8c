use crate::core::settings::ProgressSettings;
use directories::ProjectDirs;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::PathBuf;

/// File-backed implementation of the persistence halves of the host
/// contract, for standalone host bindings and tests.
///
/// Stores the settings record as one pretty-printed JSON object.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Creates a store at the platform config location for the plugin.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "vault-rpg").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            path: config_dir.join("settings.json"),
        })
    }

    /// Creates a store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the raw persisted record, `Ok(None)` if no record exists yet.
    pub fn load(&self) -> io::Result<Option<Value>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let value = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(Some(value))
    }

    /// Persists the settings record, overwriting any previous one.
    pub fn save(&self, settings: &ProgressSettings) -> io::Result<()> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(&self.path, json)?;

        Ok(())
    }
}
