//! Notification style configuration
//!
//! Numeric style values for the chat head, resolvable either from serde
//! defaults, from a persisted config file (confy), or from a [`ThemeTable`]
//! of named lookups (`notifications.<name>`), matching the theming tables
//! the app ships.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

// ─────────────────────────────────────────────────────────────────────────────
// Serde Defaults
// ─────────────────────────────────────────────────────────────────────────────

fn default_inset_container() -> f32 {
    48.0
}

fn default_inset_text() -> f32 {
    16.0
}

fn default_single_user_duration() -> f32 {
    4.0
}

fn default_gesture_threshold() -> f32 {
    40.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Notification Style
// ─────────────────────────────────────────────────────────────────────────────

/// Tunable values driving chat head presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotificationStyle {
    /// Horizontal inset the container starts behind the screen edge
    #[serde(default = "default_inset_container")]
    pub animation_inset_container: f32,
    /// Inset the text slides out from behind the avatar during reveal
    #[serde(default = "default_inset_text")]
    pub animation_inset_text: f32,
    /// Seconds the bubble stays up before auto-hiding
    #[serde(default = "default_single_user_duration")]
    pub single_user_duration: f32,
    /// Drag displacement (points) beyond which release dismisses
    #[serde(default = "default_gesture_threshold")]
    pub gesture_threshold: f32,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        Self {
            animation_inset_container: default_inset_container(),
            animation_inset_text: default_inset_text(),
            single_user_duration: default_single_user_duration(),
            gesture_threshold: default_gesture_threshold(),
        }
    }
}

impl NotificationStyle {
    /// Resolve each value from a theme table, falling back to defaults
    /// for keys the table does not carry.
    pub fn from_table(table: &ThemeTable) -> Self {
        let defaults = Self::default();
        Self {
            animation_inset_container: table
                .number("notifications.animation_inset_container")
                .unwrap_or(defaults.animation_inset_container),
            animation_inset_text: table
                .number("notifications.animation_inset_text")
                .unwrap_or(defaults.animation_inset_text),
            single_user_duration: table
                .number("notifications.single_user_duration")
                .unwrap_or(defaults.single_user_duration),
            gesture_threshold: table
                .number("notifications.gesture_threshold")
                .unwrap_or(defaults.gesture_threshold),
        }
    }

    /// Auto-hide delay as a [`Duration`]
    pub fn hide_delay(&self) -> Duration {
        Duration::from_secs_f32(self.single_user_duration.max(0.0))
    }

    /// Load the persisted style, falling back to defaults on any error
    pub fn load() -> Self {
        match confy::load("chathead", "style") {
            Ok(style) => style,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load style config, using defaults");
                Self::default()
            }
        }
    }

    /// Load the persisted style, surfacing the failure
    pub fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load("chathead", "style")?)
    }

    /// Persist the style
    pub fn store(self) -> Result<(), ConfigError> {
        confy::store("chathead", "style", self).map_err(ConfigError::Save)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme Table
// ─────────────────────────────────────────────────────────────────────────────

/// Named numeric lookups resolved by string key
///
/// Keys are namespaced with the owning feature, e.g.
/// `notifications.gesture_threshold`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeTable {
    values: HashMap<String, f32>,
}

impl ThemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f32) {
        self.values.insert(key.into(), value);
    }

    /// Look up a numeric value by key
    pub fn number(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }
}

impl FromIterator<(String, f32)> for ThemeTable {
    fn from_iter<I: IntoIterator<Item = (String, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_table_resolves_present_keys() {
        let mut table = ThemeTable::new();
        table.insert("notifications.gesture_threshold", 64.0);
        table.insert("notifications.single_user_duration", 2.5);

        let style = NotificationStyle::from_table(&table);
        assert_eq!(style.gesture_threshold, 64.0);
        assert_eq!(style.single_user_duration, 2.5);
    }

    #[test]
    fn from_table_falls_back_for_missing_keys() {
        let style = NotificationStyle::from_table(&ThemeTable::new());
        assert_eq!(style, NotificationStyle::default());
    }

    #[test]
    fn hide_delay_never_negative() {
        let style = NotificationStyle {
            single_user_duration: -1.0,
            ..Default::default()
        };
        assert_eq!(style.hide_delay(), Duration::ZERO);
    }
}
