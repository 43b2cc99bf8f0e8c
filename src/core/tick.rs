//! Pure per-tick progression logic.
//!
//! These functions mutate the settings record and return a [`TickResult`]
//! describing what happened so the engine can update the host's notices and
//! status indicator without this layer depending on any host types.

use crate::core::constants::TICK_INTERVAL_MS;
use crate::core::progression::{level_for_total_xp, total_xp};
use crate::core::settings::ProgressSettings;

/// A single event produced while processing a tick, a stats refresh, or a
/// file-creation notification.
///
/// The engine maps these to transient host notices.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// The derived level rose above the cached one.
    LeveledUp { new_level: u32, message: String },

    /// The derived level fell below the cached one (files deleted, or the
    /// per-file rate lowered).
    LeveledDown { new_level: u32, message: String },

    /// A file was created. Text-only credit: `xp` itself is untouched, the
    /// credit is realized through the live file-count term in total XP.
    FileXpCredited { xp_credited: u32, message: String },
}

impl ProgressEvent {
    /// The user-facing notice text for this event.
    pub fn message(&self) -> &str {
        match self {
            ProgressEvent::LeveledUp { message, .. }
            | ProgressEvent::LeveledDown { message, .. }
            | ProgressEvent::FileXpCredited { message, .. } => message,
        }
    }
}

/// Result of one progression update.
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Events produced, in chronological order.
    pub events: Vec<ProgressEvent>,

    /// Text for the persistent status indicator.
    pub status_text: String,

    /// Total XP at the time of the update (accrued plus file component).
    pub total_xp: u64,
}

/// Processes one 1-second XP tick: advances the session clock, accrues XP,
/// then refreshes stats. The caller persists the record afterwards.
pub fn xp_tick(settings: &mut ProgressSettings, file_count: usize) -> TickResult {
    settings.current_session_duration += TICK_INTERVAL_MS;
    settings.xp += settings.xp_per_second as u64;
    refresh_stats(settings, file_count)
}

/// Recomputes total XP and the derived level from the current file count.
///
/// Updates the cached `level` and emits a level-up or level-down event on a
/// transition. Idempotent given unchanged inputs: a second call produces the
/// same status text and no further events.
pub fn refresh_stats(settings: &mut ProgressSettings, file_count: usize) -> TickResult {
    let total = total_xp(settings.xp, file_count, settings.xp_per_file);
    let new_level = level_for_total_xp(total);

    let mut events = Vec::new();
    if new_level > settings.level {
        settings.level = new_level;
        events.push(ProgressEvent::LeveledUp {
            new_level,
            message: format!("You leveled up to level {}!", new_level),
        });
    } else if new_level < settings.level {
        settings.level = new_level;
        events.push(ProgressEvent::LeveledDown {
            new_level,
            message: format!("You leveled down to level {}!", new_level),
        });
    }

    TickResult {
        events,
        status_text: format!("[{}] {} XP gained", settings.level, total),
        total_xp: total,
    }
}

/// Processes a file-creation notification: one credit notice, then a stats
/// refresh. Does not mutate `xp`.
pub fn file_created(settings: &mut ProgressSettings, file_count: usize) -> TickResult {
    let credited = ProgressEvent::FileXpCredited {
        xp_credited: settings.xp_per_file,
        message: format!(
            "You gained {} XP for creating a file!",
            settings.xp_per_file
        ),
    };
    let mut result = refresh_stats(settings, file_count);
    result.events.insert(0, credited);
    result
}
