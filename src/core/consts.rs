//! Tunable constants for the core model.

/// Progress-per-second rate applied by [`Board::tick`]. Every entity's
/// settling progress advances by `elapsed * SETTLE_SPEED` and is clamped at
/// 1.0, so a settle completes in `1.0 / SETTLE_SPEED` seconds of frame time.
pub const SETTLE_SPEED: f64 = 8.0;
