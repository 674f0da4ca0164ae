// crates/infra/src/watch.rs
use std::time::Duration;

use word_counter_domain::PreferenceChange;
#[cfg(not(feature = "watch"))]
use word_counter_shared_kernel::InfrastructureError;
use word_counter_shared_kernel::Result;

use crate::preferences::JsonFilePreferenceStore;

#[cfg(feature = "watch")]
use {
    notify::{RecommendedWatcher, RecursiveMode, Watcher, event::EventKind},
    std::{path::Path, sync::mpsc, thread, time::Instant},
    word_counter_domain::Preferences,
    word_counter_shared_kernel::InfrastructureError,
};

/// Follows a preference file edited by other processes and reports each
/// changed key.
#[cfg(feature = "watch")]
pub struct WatchService;

#[cfg(feature = "watch")]
impl WatchService {
    /// Blocks, calling `on_change` for every key whose value differs from the
    /// previous snapshot. Falls back to polling when notifications are unavailable.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `on_change`.
    pub fn follow<F>(store: &JsonFilePreferenceStore, interval: Duration, mut on_change: F) -> Result<()>
    where
        F: FnMut(PreferenceChange) -> Result<()>,
    {
        let mut last = store.load().unwrap_or_default();
        let mut reload = |last: &mut Preferences| -> Result<()> {
            match store.load() {
                Ok(current) => {
                    for change in last.diff(&current) {
                        log::debug!("preference file changed: {change:?}");
                        on_change(change)?;
                    }
                    *last = current;
                }
                Err(err) => log::warn!("ignoring unreadable preference file: {err}"),
            }
            Ok(())
        };

        match Self::create_watcher(store.path()) {
            Ok((watcher, rx)) => {
                let _keep = &watcher;
                Self::event_loop(&rx, interval, &mut last, &mut reload)
            }
            Err(err) => {
                log::warn!("file watcher unavailable ({err}). Falling back to polling every {interval:?}.");
                Self::poll_loop(interval, &mut last, &mut reload)
            }
        }
    }

    fn create_watcher(
        path: &Path,
    ) -> std::result::Result<
        (RecommendedWatcher, mpsc::Receiver<std::result::Result<notify::Event, notify::Error>>),
        InfrastructureError,
    > {
        let (tx, rx) = mpsc::channel();
        let mut watcher: RecommendedWatcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .map_err(|err| InfrastructureError::WatchError { path: path.to_path_buf(), details: err.to_string() })?;

        // 保存は tmp からの rename なので、ファイルではなく親ディレクトリを監視する
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|err| InfrastructureError::WatchError { path: dir.to_path_buf(), details: err.to_string() })?;

        Ok((watcher, rx))
    }

    fn event_loop<F>(
        rx: &mpsc::Receiver<std::result::Result<notify::Event, notify::Error>>,
        interval: Duration,
        last: &mut Preferences,
        reload: &mut F,
    ) -> Result<()>
    where
        F: FnMut(&mut Preferences) -> Result<()>,
    {
        let mut pending: Option<Instant> = None;

        loop {
            let received = match pending {
                Some(start) => {
                    let remaining = interval.checked_sub(start.elapsed()).unwrap_or_default();
                    rx.recv_timeout(remaining)
                }
                None => rx.recv().map_err(|_| mpsc::RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(Ok(event)) => {
                    if Self::is_relevant(event.kind) && pending.is_none() {
                        pending = Some(Instant::now());
                    }
                }
                Ok(Err(err)) => log::warn!("watcher error: {err}"),
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    reload(last)?;
                    pending = None;
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => return Self::poll_loop(interval, last, reload),
            }
        }
    }

    fn poll_loop<F>(interval: Duration, last: &mut Preferences, reload: &mut F) -> Result<()>
    where
        F: FnMut(&mut Preferences) -> Result<()>,
    {
        loop {
            thread::sleep(interval);
            reload(last)?;
        }
    }

    const fn is_relevant(kind: EventKind) -> bool {
        matches!(kind, EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Other)
    }
}

#[cfg(not(feature = "watch"))]
pub struct WatchService;

#[cfg(not(feature = "watch"))]
impl WatchService {
    pub fn follow<F>(store: &JsonFilePreferenceStore, _interval: Duration, _on_change: F) -> Result<()>
    where
        F: FnMut(PreferenceChange) -> Result<()>,
    {
        Err(InfrastructureError::WatchError {
            path: store.path().to_path_buf(),
            details: "watch feature disabled at compile time".to_string(),
        }
        .into())
    }
}
