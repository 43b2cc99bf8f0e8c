//! The progression engine: owns the settings record, drives XP accrual,
//! and wires the pure tick logic to the host's notices, status indicator,
//! and persistence.
//!
//! All writes to the record flow through engine methods; the settings
//! surface never aliases the record directly.

use crate::core::constants::{FLUSH_INTERVAL_MS, TICK_INTERVAL_MS};
use crate::core::settings::ProgressSettings;
use crate::core::tick::{file_created, refresh_stats, xp_tick, TickResult};
use crate::host::{Activity, Scheduler, VaultHost};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct ProgressionEngine<H: VaultHost> {
    host: H,
    settings: ProgressSettings,
}

impl<H: VaultHost> ProgressionEngine<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            settings: ProgressSettings::default(),
        }
    }

    /// Loads the persisted record, resets the session fields, and registers
    /// the recurring activities with the host's scheduler.
    ///
    /// Performs no save and no stats refresh: the first tick, one second
    /// later, renders the first status text and produces any level notice.
    /// The host binding wires `on_file_created` once its UI reports ready.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        let persisted = match self.host.load_settings() {
            Ok(value) => value,
            Err(err) => {
                warn!("settings load failed, starting from defaults: {err}");
                None
            }
        };
        self.settings = ProgressSettings::from_persisted(persisted);
        self.settings.last_load = Utc::now().timestamp_millis();
        self.settings.current_session_duration = 0;

        scheduler.schedule_repeating(Duration::from_millis(TICK_INTERVAL_MS), Activity::XpTick);
        scheduler.schedule_repeating(
            Duration::from_millis(FLUSH_INTERVAL_MS),
            Activity::SettingsFlush,
        );
        debug!("progression engine started");
    }

    /// Dispatches a fired scheduled activity. Called by the host binding.
    pub fn run(&mut self, activity: Activity) {
        match activity {
            Activity::XpTick => self.tick(),
            Activity::SettingsFlush => self.periodic_flush(),
        }
    }

    /// One 1-second tick: session clock, XP accrual, stats refresh, save.
    pub fn tick(&mut self) {
        let result = xp_tick(&mut self.settings, self.host.file_count());
        self.present(&result);
        self.save();
    }

    /// Handles one file-creation notification from the host: the credit
    /// notice plus a stats refresh. Does not mutate `xp`.
    pub fn on_file_created(&mut self) {
        let result = file_created(&mut self.settings, self.host.file_count());
        self.present(&result);
    }

    /// Recomputes total XP and level from the live file count and updates
    /// the status indicator, emitting a notice on a level transition.
    pub fn refresh_stats(&mut self) {
        let result = refresh_stats(&mut self.settings, self.host.file_count());
        self.present(&result);
    }

    /// Unconditional save. A durability safety net independent of the
    /// tick's own save.
    pub fn periodic_flush(&mut self) {
        self.save();
    }

    /// Persists the record once. Scheduled activities are torn down by the
    /// host, so there is nothing else to clean up.
    pub fn stop(&mut self) {
        self.save();
        debug!("progression engine stopped");
    }

    /// Resets accrued XP and the cached level. The file-count component is
    /// untouched (it is never stored), and no refresh happens here: the
    /// level stays 1 until the next refresh recomputes it.
    pub fn reset_progress(&mut self) {
        self.settings.xp = 0;
        self.settings.level = 1;
        self.save();
    }

    pub fn set_xp_per_second(&mut self, value: u32) {
        self.settings.xp_per_second = value;
        self.save();
    }

    pub fn set_xp_per_file(&mut self, value: u32) {
        self.settings.xp_per_file = value;
        self.save();
    }

    pub fn set_display_session_time(&mut self, value: bool) {
        self.settings.display_session_time_as_human = value;
        self.save();
    }

    pub fn settings(&self) -> &ProgressSettings {
        &self.settings
    }

    /// The running session duration, human-formatted when the display flag
    /// is set, raw milliseconds otherwise.
    pub fn session_duration_text(&self) -> String {
        let duration = self.settings.current_session_duration;
        if self.settings.display_session_time_as_human {
            format_session_duration(duration)
        } else {
            format!("{} ms", duration)
        }
    }

    fn present(&self, result: &TickResult) {
        for event in &result.events {
            self.host.show_notice(event.message());
        }
        self.host.set_status_text(&result.status_text);
    }

    fn save(&self) {
        if let Err(err) = self.host.save_settings(&self.settings) {
            warn!("settings save failed: {err}");
        }
    }
}

/// Formats a millisecond duration as `"1h 02m 05s"`.
fn format_session_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}
