// crates/infra/src/preferences/memory.rs
use std::sync::Mutex;

use crossbeam_channel::Receiver;
use word_counter_domain::{PreferenceChange, PreferenceKey, Preferences};
use word_counter_ports::preferences::{PreferenceStore, PreferenceValues};
use word_counter_shared_kernel::Result;

use crate::broadcast::ChangeBroadcaster;

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    current: Mutex<Preferences>,
    subscribers: ChangeBroadcaster,
}

impl InMemoryPreferenceStore {
    pub fn new(initial: Preferences) -> Self {
        Self { current: Mutex::new(initial), subscribers: ChangeBroadcaster::new() }
    }

    pub fn snapshot(&self) -> Preferences {
        *self.current.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, keys: &[PreferenceKey]) -> Result<PreferenceValues> {
        Ok(PreferenceValues::select(&self.snapshot(), keys))
    }

    fn set(&self, change: PreferenceChange) -> Result<()> {
        let changed = self
            .current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .apply(change);
        if changed {
            self.subscribers.publish(change);
        }
        Ok(())
    }

    fn subscribe(&self) -> Receiver<PreferenceChange> {
        self.subscribers.subscribe()
    }
}
