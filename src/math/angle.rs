/// Rotation between consecutive frames of an `n`-frame revolution
pub fn step_degrees(frame_count: u32) -> f64 {
    360.0 / frame_count.max(1) as f64
}

/// Digits needed to print every index in `0..frame_count`, never fewer than two
///
/// The width follows the largest index, not the count: 100 frames run
/// `00..=99` and keep two digits, while 101 to 1000 frames get three.
pub fn index_width(frame_count: u32) -> usize {
    let max_index = frame_count.saturating_sub(1);
    let digits = max_index.checked_ilog10().map_or(1, |d| d as usize + 1);
    digits.max(2)
}

/// Z rotation (radians) of frame `index` starting from `start`
///
/// Computed from the index rather than accumulated so that no rounding drift
/// builds up over long batches.
pub fn frame_angle(start: f32, index: u32, frame_count: u32) -> f32 {
    let offset = (index as f64 * step_degrees(frame_count)).to_radians();
    (start as f64 + offset) as f32
}
