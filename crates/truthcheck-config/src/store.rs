//! Live settings store with change notifications.

use tokio::sync::watch;
use tracing::debug;

use truthcheck_protocols::Settings;

/// Key-value settings owned by the settings UI.
///
/// Readers take a [`watch::Receiver`] and always observe the latest value;
/// writers go through [`SettingsStore::update`], which only notifies
/// subscribers when something actually changed.
pub struct SettingsStore {
    tx: watch::Sender<Settings>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the current settings.
    pub fn current(&self) -> Settings {
        self.tx.borrow().clone()
    }

    /// Subscribe to live updates.
    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.tx.subscribe()
    }

    /// Apply a change. Returns whether subscribers were notified.
    pub fn update(&self, change: impl FnOnce(&mut Settings)) -> bool {
        let changed = self.tx.send_if_modified(|settings| {
            let before = settings.clone();
            change(settings);
            settings.api_key = settings.api_key.trim().to_string();
            *settings != before
        });
        if changed {
            let settings = self.tx.borrow();
            debug!(
                api_key_set = !settings.api_key.is_empty(),
                enable_hover = settings.enable_hover,
                enable_deep_search = settings.enable_deep_search,
                "Settings changed"
            );
        }
        changed
    }

    /// Replace all settings at once.
    pub fn replace(&self, settings: Settings) -> bool {
        self.update(|current| *current = settings)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
