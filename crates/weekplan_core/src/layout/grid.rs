//! Hour-to-pixel mapping for the day/week grid.
//!
//! # Responsibility
//! - Own every pixel constant of the 24-hour grid and the arithmetic that
//!   maps continuous hours onto it.
//!
//! # Invariants
//! - One hour is exactly 64 px on the block grid.
//! - The day-view "now" line keeps its historical 65/60 px-per-minute
//!   factor; the slight mismatch with the 64 px grid is intentional visual
//!   parity with the shipped product.

use chrono::{NaiveTime, Timelike};

/// Height of one hour on the block grid.
pub const PIXELS_PER_HOUR: f64 = 64.0;

/// Floor applied to every block, however short or inverted its range.
pub const MIN_BLOCK_HEIGHT: f64 = 32.0;

/// Extra offset the Day view adds above its grid.
pub const DAY_TOP_PADDING: f64 = 25.0;

/// Day view switches to a condensed single-line label at or below this
/// height. Presentation rule; the cutoff is a free parameter.
pub const CONDENSED_HEIGHT_THRESHOLD: f64 = 40.0;

/// Week view switches to a condensed label below this duration in hours.
pub const CONDENSED_DURATION_HOURS: f64 = 1.0;

/// Pixel offset of a continuous hour value from the top of the grid.
pub fn top_offset(hours: f64) -> f64 {
    hours * PIXELS_PER_HOUR
}

/// Clamped pixel height of a `[start, end]` hour range.
///
/// Inverted or zero-length ranges yield exactly `MIN_BLOCK_HEIGHT` rather
/// than a negative height.
pub fn block_height(start_hours: f64, end_hours: f64) -> f64 {
    ((end_hours - start_hours) * PIXELS_PER_HOUR).max(MIN_BLOCK_HEIGHT)
}

/// Pixel offset of the "now" indicator line in the Day view.
///
/// `minutes_since_midnight * 65/60`, not the 64 px grid factor.
pub fn now_indicator_offset(now: NaiveTime) -> f64 {
    let total_minutes = f64::from(now.hour() * 60 + now.minute());
    total_minutes * (65.0 / 60.0)
}
