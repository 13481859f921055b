//! Persisted application settings.
//!
//! # Responsibility
//! - Load typed settings from per-setting backend keys with defaults.
//! - Persist each setting explicitly as the last step of its setter.
//!
//! # Invariants
//! - A missing or undecodable value falls back to the documented default.
//! - Setters write only their own key, never the whole settings blob.

use crate::storage::KvBackend;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

mod keys {
    pub const NOTIFICATIONS: &str = "settings.notifications.enabled";
    pub const SOUND: &str = "settings.sound.enabled";
    pub const HAPTICS: &str = "settings.haptics.enabled";
    pub const AUTO_PLAY: &str = "settings.autoplay.enabled";
    pub const DATA_SYNC: &str = "settings.datasync.enabled";
    pub const THEME: &str = "settings.theme";
}

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppTheme {
    Light,
    Dark,
    #[default]
    System,
}

impl AppTheme {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

/// Typed settings store over an injected backend.
///
/// Values are cached in memory; every setter persists its key immediately.
/// Persistence failures are logged and dropped, matching the entity stores.
pub struct SettingsStore<B: KvBackend> {
    backend: B,
    notifications_enabled: bool,
    sound_enabled: bool,
    haptics_enabled: bool,
    auto_play_videos: bool,
    data_sync_enabled: bool,
    theme: AppTheme,
}

impl<B: KvBackend> SettingsStore<B> {
    /// Opens the store, reading each setting or falling back to its default.
    pub fn open(backend: B) -> Self {
        let notifications_enabled = load_or(&backend, keys::NOTIFICATIONS, true);
        let sound_enabled = load_or(&backend, keys::SOUND, true);
        let haptics_enabled = load_or(&backend, keys::HAPTICS, true);
        let auto_play_videos = load_or(&backend, keys::AUTO_PLAY, false);
        let data_sync_enabled = load_or(&backend, keys::DATA_SYNC, true);
        let theme = load_or(&backend, keys::THEME, AppTheme::System);

        Self {
            backend,
            notifications_enabled,
            sound_enabled,
            haptics_enabled,
            auto_play_videos,
            data_sync_enabled,
            theme,
        }
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.notifications_enabled = enabled;
        persist(&mut self.backend, keys::NOTIFICATIONS, &enabled);
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
        persist(&mut self.backend, keys::SOUND, &enabled);
    }

    pub fn haptics_enabled(&self) -> bool {
        self.haptics_enabled
    }

    pub fn set_haptics_enabled(&mut self, enabled: bool) {
        self.haptics_enabled = enabled;
        persist(&mut self.backend, keys::HAPTICS, &enabled);
    }

    pub fn auto_play_videos(&self) -> bool {
        self.auto_play_videos
    }

    pub fn set_auto_play_videos(&mut self, enabled: bool) {
        self.auto_play_videos = enabled;
        persist(&mut self.backend, keys::AUTO_PLAY, &enabled);
    }

    pub fn data_sync_enabled(&self) -> bool {
        self.data_sync_enabled
    }

    pub fn set_data_sync_enabled(&mut self, enabled: bool) {
        self.data_sync_enabled = enabled;
        persist(&mut self.backend, keys::DATA_SYNC, &enabled);
    }

    pub fn theme(&self) -> AppTheme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: AppTheme) {
        self.theme = theme;
        persist(&mut self.backend, keys::THEME, &theme);
    }
}

fn load_or<B: KvBackend, T: DeserializeOwned>(backend: &B, key: &str, default: T) -> T {
    match backend.get(key) {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=settings_load module=settings status=discarded key={key} error={err}");
                default
            }
        },
        Ok(None) => default,
        Err(err) => {
            warn!("event=settings_load module=settings status=error key={key} error={err}");
            default
        }
    }
}

fn persist<B: KvBackend, T: Serialize>(backend: &mut B, key: &str, value: &T) {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("event=settings_persist module=settings status=error key={key} stage=encode error={err}");
            return;
        }
    };
    if let Err(err) = backend.set(key, &bytes) {
        warn!("event=settings_persist module=settings status=error key={key} stage=write error={err}");
    }
}
