// Display settings, persisted to localStorage as JSON.
use serde::{Deserialize, Serialize};

use crate::state::finger::TrailStyle;
use crate::util::clog;

pub const STORAGE_KEY: &str = "mt_settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_crosshair: bool,
    pub show_footprint: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_crosshair: true,
            show_footprint: true,
        }
    }
}

impl Settings {
    pub fn trail_style(&self) -> TrailStyle {
        TrailStyle {
            footprint: self.show_footprint,
            crosshair: self.show_crosshair,
        }
    }

    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(s) => Some(s),
            Err(e) => {
                clog(&format!("ignoring stored settings: {}", e));
                None
            }
        }
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    if let Some(s) = Self::from_json(&raw) {
                        return s;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(STORAGE_KEY, &s);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let s = Settings::from_json(r#"{"show_crosshair":false}"#).unwrap();
        assert!(!s.show_crosshair);
        assert!(s.show_footprint);
    }

    #[test]
    fn test_stale_idle_gap_field_is_ignored() {
        let s = Settings::from_json(r#"{"show_footprint":false,"idle_reset_ms":5000.0}"#).unwrap();
        assert_eq!(
            s,
            Settings {
                show_crosshair: true,
                show_footprint: false,
            }
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(Settings::from_json("not json").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            show_crosshair: false,
            show_footprint: true,
        };
        let raw = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&raw), Some(s));
    }

    #[test]
    fn test_trail_style_follows_flags() {
        let s = Settings {
            show_footprint: false,
            ..Default::default()
        };
        let style = s.trail_style();
        assert!(!style.footprint);
        assert!(style.crosshair);
    }
}
