//! Contracts for the capabilities the host application provides.
//!
//! The host owns rendering, event delivery, storage durability, and timer
//! lifecycle. This crate only consumes the narrow surface below; a host
//! binding implements [`VaultHost`] and [`Scheduler`] and drives the engine
//! from its own event loop.

use crate::core::settings::ProgressSettings;
use serde_json::Value;
use std::io;
use std::time::Duration;

/// The host capabilities the progression engine consumes.
///
/// All callbacks run on the host's single-threaded event loop, never
/// concurrently. Persistence is fire-and-forget from the engine's
/// perspective: errors are logged and otherwise swallowed.
pub trait VaultHost {
    /// Number of files currently in the vault. Re-queried on every stats
    /// refresh so the file-count XP term reflects live vault state.
    fn file_count(&self) -> usize;

    /// Displays a short-lived notice to the user.
    fn show_notice(&self, message: &str);

    /// Updates the persistent status indicator's text.
    fn set_status_text(&self, text: &str);

    /// Loads the persisted settings record, `Ok(None)` if none exists yet.
    fn load_settings(&self) -> io::Result<Option<Value>>;

    /// Persists the settings record. Completion is not awaited by the
    /// engine; a later save always carries state at least as new.
    fn save_settings(&self, settings: &ProgressSettings) -> io::Result<()>;
}

/// A recurring activity the engine asks the host to schedule.
///
/// The host fires the activity back through
/// [`ProgressionEngine::run`](crate::engine::ProgressionEngine::run) every
/// interval for as long as the plugin is loaded, and tears the registration
/// down automatically at unload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// 1 Hz XP accrual, stats refresh, and save.
    XpTick,
    /// Redundant durability flush, independent of the tick's own save.
    SettingsFlush,
}

/// Recurring-callback registration, injected at engine start.
///
/// Tests substitute a recording fake to drive ticks deterministically
/// without a real timer.
pub trait Scheduler {
    fn schedule_repeating(&mut self, interval: Duration, activity: Activity);
}
