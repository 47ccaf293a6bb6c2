//! Polling backoff policy.

use std::time::Duration;

const BASE_DELAY: Duration = Duration::from_millis(500);
const MAX_DELAY: Duration = Duration::from_millis(4000);

/// Returns the delay to wait before poll number `attempt` (0-based).
///
/// Doubles from 500ms up to a 4s ceiling: 500ms, 1s, 2s, 4s, 4s, ...
/// Monotonically non-decreasing and total over all attempt numbers;
/// attempts past the ceiling saturate instead of overflowing.
pub fn poll_delay(attempt: u32) -> Duration {
    // 500ms << 3 reaches the 4s ceiling; larger shifts are clamped.
    let factor = 1u32 << attempt.min(3);
    MAX_DELAY.min(BASE_DELAY * factor)
}
