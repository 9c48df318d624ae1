//! Animation descriptions emitted by the state machine
//!
//! The session never animates anything itself; it hands out these specs as
//! data. A renderer samples [`Easing::apply`] per frame, and the driver
//! schedules a completion event after [`RevealAnimation::total_duration`] /
//! [`HideAnimation::duration`] elapses.

use std::time::Duration;

/// Container slide duration for reveal and timed hide
pub const CONTAINER_SLIDE_SECS: f32 = 0.35;
/// Text inset slide duration during reveal
pub const TEXT_SLIDE_SECS: f32 = 0.55;
/// Delay before the text inset slide starts
pub const TEXT_SLIDE_DELAY_SECS: f32 = 0.05;

/// Easing curve applied over normalized animation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Fast start, exponential settle. Used for reveal and timed hide.
    EaseOutExpo,
    /// Accelerating curve. Used for the fling-off-screen dismissal.
    EaseInQuad,
}

impl Easing {
    /// Sample the curve at normalized time `t` in [0, 1]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Easing::EaseInQuad => t * t,
        }
    }
}

/// A single timed transition of one animatable property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Delay before the transition starts (seconds)
    pub delay: f32,
    /// Transition duration (seconds)
    pub duration: f32,
    pub easing: Easing,
}

impl AnimationSpec {
    /// Time from scheduling until the transition has fully settled
    pub fn total_secs(&self) -> f32 {
        self.delay + self.duration
    }
}

/// Slide-in of the bubble: container offset + opacity, then text inset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAnimation {
    /// Container slide from `from_offset` to the resting position (0.0)
    pub container: AnimationSpec,
    /// Text sliding out from behind the avatar
    pub text: AnimationSpec,
    /// Horizontal offset the bubble starts from
    pub from_offset: f32,
    /// Distance the text starts tucked behind the avatar
    pub text_inset: f32,
}

impl RevealAnimation {
    /// Standard reveal starting at `from_offset`
    pub fn new(from_offset: f32, text_inset: f32) -> Self {
        Self {
            container: AnimationSpec {
                delay: 0.0,
                duration: CONTAINER_SLIDE_SECS,
                easing: Easing::EaseOutExpo,
            },
            text: AnimationSpec {
                delay: TEXT_SLIDE_DELAY_SECS,
                duration: TEXT_SLIDE_SECS,
                easing: Easing::EaseOutExpo,
            },
            from_offset,
            text_inset,
        }
    }

    /// Time until both slides have settled (the reveal counts as finished)
    pub fn total_duration(&self) -> Duration {
        let secs = self.container.total_secs().max(self.text.total_secs());
        Duration::from_secs_f32(secs)
    }
}

/// Slide-out of the bubble toward the screen edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HideAnimation {
    pub spec: AnimationSpec,
    pub from_offset: f32,
    /// Off-screen offset the bubble settles at before removal
    pub to_offset: f32,
}

impl HideAnimation {
    /// Timed auto-hide back behind the screen edge
    pub fn timed(from_offset: f32, to_offset: f32) -> Self {
        Self {
            spec: AnimationSpec {
                delay: 0.0,
                duration: CONTAINER_SLIDE_SECS,
                easing: Easing::EaseOutExpo,
            },
            from_offset,
            to_offset,
        }
    }

    /// Fling dismissal with a velocity-derived duration
    pub fn fling(duration_secs: f32, from_offset: f32, to_offset: f32) -> Self {
        Self {
            spec: AnimationSpec {
                delay: 0.0,
                duration: duration_secs,
                easing: Easing::EaseInQuad,
            },
            from_offset,
            to_offset,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.spec.total_secs())
    }
}
