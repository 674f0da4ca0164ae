// crates/ports/src/preferences.rs
use crossbeam_channel::Receiver;
use serde::{Deserialize, Serialize};
use word_counter_domain::{Language, PreferenceChange, PreferenceKey, Preferences};
use word_counter_shared_kernel::Result;

/// Values returned for a `get` request. Keys that were not requested,
/// or that the store has never seen, are `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl PreferenceValues {
    /// Picks the requested keys out of a full snapshot.
    #[must_use]
    pub fn select(prefs: &Preferences, keys: &[PreferenceKey]) -> Self {
        let mut values = Self::default();
        for key in keys {
            match key {
                PreferenceKey::AutoMode => values.auto_mode = Some(prefs.auto_mode),
                PreferenceKey::Language => values.language = Some(prefs.language),
            }
        }
        values
    }

    /// Fills anything missing with the defaults.
    #[must_use]
    pub fn resolve(self) -> Preferences {
        let defaults = Preferences::default();
        Preferences {
            auto_mode: self.auto_mode.unwrap_or(defaults.auto_mode),
            language: self.language.unwrap_or(defaults.language),
        }
    }
}

/// Port for the key-value preference storage.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, keys: &[PreferenceKey]) -> Result<PreferenceValues>;

    /// Persists one change and announces it to every subscriber.
    fn set(&self, change: PreferenceChange) -> Result<()>;

    /// Stream of changes made after this call.
    fn subscribe(&self) -> Receiver<PreferenceChange>;
}

/// Reads every preference, falling back to the defaults if the store fails.
pub fn load_preferences(store: &dyn PreferenceStore) -> Preferences {
    match store.get(&PreferenceKey::ALL) {
        Ok(values) => values.resolve(),
        Err(err) => {
            log::warn!("preference store unavailable, using defaults: {err}");
            Preferences::default()
        }
    }
}
