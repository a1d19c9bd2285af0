//! Priority remapping from the PRD's 3-level scale to the tracker's 5-level scale

/// Tracker priority for anything that is not a recognized PRD level
pub const MEDIUM_PRIORITY: u8 = 2;

/// Map a PRD priority (1 = high, 2 = medium, 3 = low) to a tracker priority
/// (0 = highest .. 4 = lowest).
///
/// Never fails: absent, zero, negative and out-of-range levels all map to
/// medium.
pub fn map_priority(level: Option<i64>) -> u8 {
    match level {
        Some(1) => 0,
        Some(2) => 2,
        Some(3) => 3,
        _ => MEDIUM_PRIORITY,
    }
}
