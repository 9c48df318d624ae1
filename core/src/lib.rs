//! Chathead Core Library
//!
//! Domain logic for the in-app chat head notification: the bubble content
//! model, the presentation state machine, gesture physics, and the style
//! configuration layer. Everything here is pure and renderer-agnostic;
//! state transitions emit [`session::Effect`] values that a driver
//! (chathead-overlay) schedules and a renderer interprets.

pub mod animation;
pub mod config;
pub mod delegate;
pub mod error;
pub mod notification;
pub mod session;

// Re-export commonly used types
pub use animation::{AnimationSpec, Easing, HideAnimation, RevealAnimation};
pub use config::{NotificationStyle, ThemeTable};
pub use delegate::ChatHeadsDelegate;
pub use error::ConfigError;
pub use notification::{ChatHeadContent, LocalNotification};
pub use session::{BubbleSession, Effect, PresentationState, SessionEvent};
