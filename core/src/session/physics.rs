//! Gesture physics for drag-to-dismiss
//!
//! The bubble dismisses toward negative x (back behind the edge it slid in
//! from). Dragging that way tracks the finger 1:1; dragging the other way
//! runs into a resistance curve that clamps overscroll below the view width.

/// Resistance factor for drags opposing the dismiss direction
pub const PAN_RESISTANCE: f32 = 0.15;

/// Minimum fling-off-screen animation duration (seconds)
pub const MIN_FLING_SECS: f32 = 0.05;
/// Maximum fling-off-screen animation duration (seconds)
pub const MAX_FLING_SECS: f32 = 0.2;

/// Map a raw drag displacement to the bubble offset.
///
/// Identity for dismiss-ward drags (`dx <= 0`); for opposing drags the
/// damped curve `(1 − 1/((x·k/W)+1))·W` which approaches but never reaches
/// the view width.
pub fn resist(dx: f32, width: f32) -> f32 {
    if dx <= 0.0 {
        dx
    } else {
        (1.0 - 1.0 / ((dx * PAN_RESISTANCE / width) + 1.0)) * width
    }
}

/// Duration for the fling-off-screen animation.
///
/// Derived from `dx = t·v + d0`: the remaining distance divided by the
/// release velocity, clamped to [`MIN_FLING_SECS`, `MAX_FLING_SECS`]. A zero
/// or non-finite velocity clamps to the ceiling.
pub fn fling_duration(width: f32, dx: f32, velocity_x: f32) -> f32 {
    let speed = velocity_x.abs();
    if speed <= f32::EPSILON || !speed.is_finite() {
        return MAX_FLING_SECS;
    }
    let time = (width - dx.abs()) / speed;
    time.clamp(MIN_FLING_SECS, MAX_FLING_SECS)
}
