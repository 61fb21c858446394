//! Config file watcher implementation.

use flowkeys_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Quiet period after the last file event before a reload is signalled.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches the shortcut config file and signals when it changes.
///
/// The host reloads the config on each signal, rebuilds its binding
/// registry and command table, and rebinds its dispatcher.
pub struct ConfigWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self {
            path,
            debounce: DEFAULT_DEBOUNCE,
        })
    }

    /// Override the debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Watch the config file, sending `()` on `tx` after each debounced change.
    ///
    /// Runs until the underlying notify channel closes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone());
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        // Bridges the sync notify callback into async.
        let (notify_tx, mut notify_rx) = mpsc::channel::<()>(16);

        // Dropping the watcher stops delivery, so it lives for the whole loop.
        let _watcher = start_notify_watcher(&watch_dir, file_name, notify_tx)?;

        loop {
            if notify_rx.recv().await.is_none() {
                break;
            }

            let debounce = tokio::time::sleep(self.debounce);
            tokio::pin!(debounce);

            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("shortcut config changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        Ok(())
    }
}

fn start_notify_watcher(
    watch_dir: &Path,
    file_name: OsString,
    notify_tx: mpsc::Sender<()>,
) -> Result<RecommendedWatcher, ConfigError> {
    let mut watcher = RecommendedWatcher::new(
        move |result: Result<Event, notify::Error>| match result {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                let is_config = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().is_some_and(|n| n == file_name));
                if is_config {
                    debug!("config file change detected");
                    let _ = notify_tx.try_send(());
                }
            }
            Err(e) => error!("file watcher error: {e}"),
        },
        notify::Config::default(),
    )
    .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

    watcher
        .watch(watch_dir, RecursiveMode::NonRecursive)
        .map_err(|e| {
            ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
        })?;

    Ok(watcher)
}
