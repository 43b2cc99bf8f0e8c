use crate::core::constants::{DEFAULT_LEVEL, DEFAULT_XP_PER_FILE, DEFAULT_XP_PER_SECOND};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// The single persisted settings record shared by the engine and the
/// settings surface.
///
/// Serialized as a flat JSON object with camelCase keys so records written
/// by earlier releases merge cleanly. Every field carries its own default:
/// a partial persisted record keeps defaults for whatever it omits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSettings {
    /// Time of the last successful load, in epoch milliseconds. Informational.
    #[serde(default)]
    pub last_load: i64,
    /// Current derived level. A cache of `level_for_total_xp`, never an
    /// independent source of truth.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Accrued time XP. Excludes the live file-count component.
    #[serde(default)]
    pub xp: u64,
    /// XP accrued per tick.
    #[serde(default = "default_xp_per_second")]
    pub xp_per_second: u32,
    /// XP credited per existing file. Computed live from the file count,
    /// never stored per file.
    #[serde(default = "default_xp_per_file")]
    pub xp_per_file: u32,
    /// Elapsed milliseconds since this load. Reset to 0 on every load.
    #[serde(default)]
    pub current_session_duration: u64,
    /// Render the session duration as a human-readable string.
    // Legacy key - kept for backward compatibility with old records.
    #[serde(rename = "displayStaringTimeAsHumanString", default = "default_display_flag")]
    pub display_session_time_as_human: bool,
}

fn default_level() -> u32 {
    DEFAULT_LEVEL
}

fn default_xp_per_second() -> u32 {
    DEFAULT_XP_PER_SECOND
}

fn default_xp_per_file() -> u32 {
    DEFAULT_XP_PER_FILE
}

fn default_display_flag() -> bool {
    true
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            last_load: 0,
            level: default_level(),
            xp: 0,
            xp_per_second: default_xp_per_second(),
            xp_per_file: default_xp_per_file(),
            current_session_duration: 0,
            display_session_time_as_human: default_display_flag(),
        }
    }
}

impl ProgressSettings {
    /// Builds a settings record from whatever the host handed back.
    ///
    /// `None` and records that fail to deserialize both yield defaults;
    /// a partial record keeps defaults for its missing fields. Never fails.
    pub fn from_persisted(persisted: Option<Value>) -> Self {
        match persisted {
            None => Self::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
                warn!("persisted settings unreadable, using defaults: {err}");
                Self::default()
            }),
        }
    }
}
