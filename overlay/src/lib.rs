//! Chathead Overlay Library
//!
//! Async driver for the chat head notification bubble.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  ChatHeadsHandle                    │
//! │      (display triggers + pan gesture stream)        │
//! ├─────────────────────────────────────────────────────┤
//! │                ChatHeadsController                  │
//! │   owns the BubbleSession, schedules timers and      │
//! │   animation completions on the tokio runtime        │
//! ├─────────────────────────────────────────────────────┤
//! │                  RenderCommand stream               │
//! │   (show/move/animate/remove, consumed by whatever   │
//! │    renderer the host application plugs in)          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The controller never draws; it turns [`chathead_core::Effect`] values
//! into [`RenderCommand`]s and feeds animation/timer completions back into
//! the state machine. All session mutation happens on the controller task,
//! so transitions never interleave.

pub mod controller;
pub mod tasks;

#[cfg(test)]
mod controller_tests;

// Re-export commonly used types
pub use controller::{
    ChatHeadsController, ChatHeadsHandle, ControllerError, PanEvent, RenderCommand,
};
