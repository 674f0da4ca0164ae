// crates/infra/src/preferences/json_file.rs
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crossbeam_channel::Receiver;
use fs2::FileExt;
use word_counter_domain::{PreferenceChange, PreferenceKey, Preferences};
use word_counter_ports::preferences::{PreferenceStore, PreferenceValues};
use word_counter_shared_kernel::{ErrorContext, InfrastructureError, Result};

use crate::broadcast::ChangeBroadcaster;

/// Preferences persisted as `{"autoMode": bool, "language": "ja"|"en"}`.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    subscribers: ChangeBroadcaster,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), subscribers: ChangeBroadcaster::new() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file. A missing file means "never written" and yields the defaults.
    pub fn load(&self) -> Result<Preferences> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(err) => {
                return Err(InfrastructureError::FileRead { path: self.path.clone(), source: err }.into());
            }
        };
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Preferences::default());
        }
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Writes the whole snapshot atomically under an exclusive lock.
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        self.locked(|| self.write(prefs))
    }

    /// Runs `f` while holding the exclusive lock on `<name>.lock`.
    ///
    /// The lock file is left in place after unlocking: removing it would let a
    /// waiter hold a lock on an unlinked inode while a new writer locks a fresh one.
    fn locked<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(err) = fs::create_dir_all(parent)
        {
            return Err(InfrastructureError::FileWrite { path: parent.to_path_buf(), source: err }.into());
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|err| InfrastructureError::FileWrite { path: lock_path.clone(), source: err })?;
        lock_file
            .lock_exclusive()
            .map_err(|err| InfrastructureError::FileWrite { path: lock_path.clone(), source: err })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }

    /// Caller must hold the lock.
    fn write(&self, prefs: &Preferences) -> Result<()> {
        let data = serde_json::to_vec_pretty(prefs)?;
        let tmp_path = self.path.with_extension("tmp");
        write_tmp_and_rename(&tmp_path, &self.path, &data)
            .map_err(|err| InfrastructureError::FileWrite { path: tmp_path.clone(), source: err })?;
        log::debug!("saved preferences to {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, keys: &[PreferenceKey]) -> Result<PreferenceValues> {
        Ok(PreferenceValues::select(&self.load()?, keys))
    }

    fn set(&self, change: PreferenceChange) -> Result<()> {
        let changed = self.locked(|| {
            let mut prefs = self.load()?;
            if !prefs.apply(change) {
                return Ok(false);
            }
            self.write(&prefs)?;
            Ok(true)
        })?;
        if changed {
            self.subscribers.publish(change);
        }
        Ok(())
    }

    fn subscribe(&self) -> Receiver<PreferenceChange> {
        self.subscribers.subscribe()
    }
}

fn write_tmp_and_rename(tmp_path: &Path, final_path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(data)?;
    file.flush()?;
    fs::rename(tmp_path, final_path)?;
    Ok(())
}
