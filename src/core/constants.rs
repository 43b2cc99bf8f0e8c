// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const FLUSH_INTERVAL_MS: u64 = 600_000;

// XP and leveling
pub const XP_PER_LEVEL: u64 = 600;

// Settings defaults
pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_XP_PER_SECOND: u32 = 1;
pub const DEFAULT_XP_PER_FILE: u32 = 50;
