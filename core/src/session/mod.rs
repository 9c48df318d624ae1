//! Chat head presentation state machine
//!
//! One [`BubbleSession`] models the lifecycle of a single on-screen bubble:
//!
//! ```text
//! Hidden → Showing → Visible → Dragging → Hiding → Hidden
//! ```
//!
//! [`BubbleSession::handle`] is a pure transition function: it mutates only
//! the session and returns [`Effect`]s (animation requests, timer arm,
//! offset updates, destruction) as data. The driver schedules those effects
//! and feeds completion events back in, so the machine itself never touches
//! a clock or a view.

pub mod physics;


use std::time::Duration;

use crate::animation::{HideAnimation, RevealAnimation};
use crate::config::NotificationStyle;

/// Presentation state of the active bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    /// No bubble on screen
    Hidden,
    /// Reveal animation in flight
    Showing,
    /// At rest, auto-hide timer armed
    Visible,
    /// Finger down, offset tracking the drag
    Dragging,
    /// Hide animation in flight
    Hiding,
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A validated notification wants to display
    Trigger,
    /// The reveal (or snap-back) animation settled
    RevealFinished,
    DragBegan,
    DragMoved { dx: f32 },
    DragEnded { dx: f32, velocity_x: f32 },
    /// The auto-hide timer elapsed
    HideTimerFired,
    /// The hide animation settled
    HideFinished,
}

/// Outputs of the state machine, interpreted by the driver
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Slide the bubble in (initial reveal or post-drag snap back)
    Reveal(RevealAnimation),
    /// Move the bubble to a new horizontal offset immediately
    SetOffset(f32),
    /// (Re)arm the single-shot auto-hide timer, cancelling any pending one
    ArmHideTimer(Duration),
    /// Slide the bubble off screen
    HideOut(HideAnimation),
    /// Remove the bubble; the session is back to `Hidden`
    Destroy,
}

/// One active chat head bubble
#[derive(Debug, Clone)]
pub struct BubbleSession {
    state: PresentationState,
    /// Horizontal offset from the resting position (0.0 = at rest)
    offset_x: f32,
    /// Width of the containing view, captured at display time
    width: f32,
    style: NotificationStyle,
}

impl BubbleSession {
    pub fn new(style: NotificationStyle, width: f32) -> Self {
        Self {
            state: PresentationState::Hidden,
            offset_x: 0.0,
            width,
            style,
        }
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn style(&self) -> &NotificationStyle {
        &self.style
    }

    /// Apply one event, returning the effects to perform.
    ///
    /// Events that make no sense in the current state are dropped without
    /// effects, so stale completions from a superseded animation are safe.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        use PresentationState::*;

        match (self.state, event) {
            (Hidden, SessionEvent::Trigger) => {
                self.state = Showing;
                self.offset_x = -self.style.animation_inset_container;
                vec![Effect::Reveal(RevealAnimation::new(
                    self.offset_x,
                    self.style.animation_inset_text,
                ))]
            }
            // Queuing is unimplemented; a second trigger is dropped
            (_, SessionEvent::Trigger) => {
                tracing::debug!(state = ?self.state, "Chat head busy, dropping trigger");
                vec![]
            }

            (Showing, SessionEvent::RevealFinished) => {
                self.state = Visible;
                self.offset_x = 0.0;
                vec![Effect::ArmHideTimer(self.style.hide_delay())]
            }
            // Snap-back settling while already Visible
            (Visible, SessionEvent::RevealFinished) => {
                self.offset_x = 0.0;
                vec![]
            }

            (Showing | Visible, SessionEvent::DragBegan) => {
                self.state = Dragging;
                vec![]
            }

            (Dragging, SessionEvent::DragMoved { dx }) => {
                self.offset_x = physics::resist(dx, self.width);
                vec![Effect::SetOffset(self.offset_x)]
            }

            (Dragging, SessionEvent::DragEnded { dx, velocity_x }) => {
                if dx < 0.0 && dx.abs() > self.style.gesture_threshold {
                    self.state = Hiding;
                    let secs = physics::fling_duration(self.width, dx, velocity_x);
                    vec![Effect::HideOut(HideAnimation::fling(
                        secs,
                        self.offset_x,
                        -self.width,
                    ))]
                } else {
                    self.state = Visible;
                    vec![
                        Effect::Reveal(RevealAnimation::new(
                            self.offset_x,
                            self.style.animation_inset_text,
                        )),
                        Effect::ArmHideTimer(self.style.hide_delay()),
                    ]
                }
            }

            // Mid-drag the timer reschedules itself instead of hiding
            (Dragging, SessionEvent::HideTimerFired) => {
                vec![Effect::ArmHideTimer(self.style.hide_delay())]
            }

            (Showing | Visible, SessionEvent::HideTimerFired) => {
                self.state = Hiding;
                vec![Effect::HideOut(HideAnimation::timed(
                    self.offset_x,
                    -self.style.animation_inset_container,
                ))]
            }

            (Hiding, SessionEvent::HideFinished) => {
                self.state = Hidden;
                self.offset_x = 0.0;
                vec![Effect::Destroy]
            }

            (state, event) => {
                tracing::trace!(?state, ?event, "Ignoring event");
                vec![]
            }
        }
    }
}
