//! Pure level math over the fixed 600-XP-per-level curve.

use crate::core::constants::XP_PER_LEVEL;

/// Total XP: accrued time XP plus the live file-count component.
pub fn total_xp(xp: u64, file_count: usize, xp_per_file: u32) -> u64 {
    xp + file_count as u64 * xp_per_file as u64
}

/// Level derived from total XP. Always at least 1.
pub fn level_for_total_xp(total_xp: u64) -> u32 {
    (total_xp / XP_PER_LEVEL + 1) as u32
}
