use crate::{DurableStorage, Result as SessionResult, SessionError};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use dl_auth::Credential;
use dl_config::{Config, ConfigErrorResult};
use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Durable storage backed by a JSON file of `key -> value` entries.
///
/// Only the configured key is read or written; other entries in the file
/// are preserved.
pub struct FileStorage {
    path: PathBuf,
    key: String,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Storage at the configured location (`<config dir>/<storage_file>`)
    pub fn from_config(config: &Config) -> ConfigErrorResult<Self> {
        Ok(Self::new(
            config.storage_path()?,
            config.session.storage_key.clone(),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry.
    ///
    /// A missing file is empty. A corrupted file is backed up and treated
    /// as empty.
    fn read_entries(&self) -> SessionResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            debug!("No session storage at {:?}", self.path);
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| SessionError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Session storage corrupted at {:?}: {e}", self.path);
                self.backup_corrupted()?;
                Ok(BTreeMap::new())
            }
        }
    }

    /// Write every entry with the temp file + fsync + rename pattern
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> SessionResult<()> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        fs::create_dir_all(&dir).map_err(|e| SessionError::dir_creation(dir.clone(), e))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "storage.json".to_string());
        let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }

    /// Renames the file to `<name>.corrupted.<timestamp>`
    pub fn backup_corrupted(&self) -> SessionResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup_name = self.path.as_os_str().to_os_string();
        backup_name.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup_name);

        fs::rename(&self.path, &backup_path).map_err(SessionError::backup_failed)?;

        warn!("Backed up corrupted session storage to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl DurableStorage for FileStorage {
    fn load(&self) -> SessionResult<Option<Credential>> {
        let entries = self.read_entries()?;
        Ok(entries.get(&self.key).cloned().map(Credential::from))
    }

    fn save(&self, credential: Option<&Credential>) -> SessionResult<()> {
        let mut entries = self.read_entries()?;

        match credential {
            Some(credential) => {
                entries.insert(self.key.clone(), credential.as_str().to_string());
            }
            None => {
                if entries.remove(&self.key).is_none() {
                    return Ok(());
                }
            }
        }

        self.write_entries(&entries)?;
        info!(
            "Session storage {} ({:?})",
            if credential.is_some() { "saved" } else { "cleared" },
            self.path
        );
        Ok(())
    }
}
