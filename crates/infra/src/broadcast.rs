// crates/infra/src/broadcast.rs
use std::sync::Mutex;

use crossbeam_channel::{Receiver, Sender, unbounded};
use word_counter_domain::PreferenceChange;

/// Fan-out of preference changes to every live subscriber.
#[derive(Debug, Default)]
pub struct ChangeBroadcaster {
    senders: Mutex<Vec<Sender<PreferenceChange>>>,
}

impl ChangeBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<PreferenceChange> {
        let (tx, rx) = unbounded();
        self.lock().push(tx);
        rx
    }

    /// Sends `change` to all subscribers, dropping those whose receiver is gone.
    pub fn publish(&self, change: PreferenceChange) {
        self.lock().retain(|tx| tx.send(change).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Sender<PreferenceChange>>> {
        // poison されても送信側リストは一貫している
        self.senders.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
