//! Configuration file watcher for hot reload.
//!
//! A changed file is only published once it parses, validates and yields a
//! [`Negotiator`]; anything else keeps the policy the server already runs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::MicroversionConfig;
use crate::error::MicroversionError;
use crate::negotiation::Negotiator;

/// Why a changed configuration file was not published.
#[derive(Debug, Error)]
pub enum ReloadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("policy rejected: {0}")]
    Policy(#[from] MicroversionError),
}

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<MicroversionConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configurations whose service
    /// policy is known to build.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<MicroversionConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    publish_reload(&path, &tx);
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// Load `path` and check its service section builds a negotiator.
pub fn reload_config(path: &Path) -> Result<MicroversionConfig, ReloadError> {
    let config = load_config(path)?;
    Negotiator::from_config(&config.service)?;
    Ok(config)
}

/// Send the reloaded configuration on `tx`; returns whether anything was sent.
fn publish_reload(path: &Path, tx: &mpsc::UnboundedSender<MicroversionConfig>) -> bool {
    match reload_config(path) {
        Ok(config) => {
            tracing::info!(
                service_type = %config.service.service_type,
                versions = ?config.service.versions,
                "Config file change detected, publishing new policy"
            );
            tx.send(config).is_ok()
        }
        Err(e) => {
            tracing::error!(
                path = ?path,
                error = %e,
                "Failed to reload config, keeping current configuration"
            );
            false
        }
    }
}
