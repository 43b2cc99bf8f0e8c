//! Vault RPG - gamified progression for a note vault.
//!
//! Awards XP for time spent in the vault and for the files it contains,
//! derives a level from total XP, and surfaces both through the host's
//! status indicator and notices. The host application implements the
//! [`host::VaultHost`] and [`host::Scheduler`] contracts and drives the
//! [`engine::ProgressionEngine`] from its event loop.

pub mod core;
pub mod engine;
pub mod host;
pub mod settings_tab;
pub mod store;

pub use self::core::constants::{FLUSH_INTERVAL_MS, TICK_INTERVAL_MS, XP_PER_LEVEL};
pub use self::core::settings::ProgressSettings;
pub use self::core::tick::{ProgressEvent, TickResult};
pub use engine::ProgressionEngine;
pub use host::{Activity, Scheduler, VaultHost};
pub use store::FileSettingsStore;
