//! Chat heads controller
//!
//! Owns one [`BubbleSession`] and drives it from three inputs: display
//! triggers, the pan gesture stream, and completions posted back by its own
//! timer/animation tasks. Effects come out the other side as
//! [`RenderCommand`]s for the host renderer.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;

use chathead_core::{
    BubbleSession, ChatHeadContent, ChatHeadsDelegate, Effect, HideAnimation, LocalNotification,
    NotificationStyle, PresentationState, RevealAnimation, SessionEvent,
};

use crate::tasks::BubbleTasks;

/// Continuous pointer interaction events, in view coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    Began,
    Moved { dx: f32 },
    Ended { dx: f32, velocity_x: f32 },
}

/// Instructions for the renderer, in presentation order
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Mount the bubble at the given horizontal offset
    ShowBubble {
        content: ChatHeadContent,
        offset: f32,
    },
    /// Animate the bubble to its resting position
    Reveal(RevealAnimation),
    /// Move the bubble immediately (drag tracking)
    SetOffset(f32),
    /// Animate the bubble off screen
    HideOut(HideAnimation),
    /// Unmount the bubble
    RemoveBubble,
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("chat heads controller is not running")]
    Closed,
}

enum ControllerMessage {
    Display(LocalNotification),
    Pan(PanEvent),
    /// Timer/animation completion for the bubble of the given generation
    Session {
        generation: u64,
        event: SessionEvent,
    },
}

/// Cloneable input side of the controller
#[derive(Clone)]
pub struct ChatHeadsHandle {
    tx: mpsc::Sender<ControllerMessage>,
}

impl ChatHeadsHandle {
    /// Request display of a notification.
    ///
    /// Dropped without error when a bubble is already active or the
    /// notification has no displayable content.
    pub async fn try_display(&self, note: LocalNotification) -> Result<(), ControllerError> {
        self.tx
            .send(ControllerMessage::Display(note))
            .await
            .map_err(|_| ControllerError::Closed)
    }

    /// Feed one pan gesture event
    pub async fn pan(&self, event: PanEvent) -> Result<(), ControllerError> {
        self.tx
            .send(ControllerMessage::Pan(event))
            .await
            .map_err(|_| ControllerError::Closed)
    }
}

/// Driver task for the chat head bubble
pub struct ChatHeadsController {
    session: BubbleSession,
    /// Bumped on every destroy; stale completions carry the old value
    generation: u64,
    tasks: BubbleTasks,
    active: Option<LocalNotification>,
    delegate: Option<Arc<dyn ChatHeadsDelegate + Send + Sync>>,
    self_tx: mpsc::Sender<ControllerMessage>,
    render_tx: mpsc::Sender<RenderCommand>,
}

impl ChatHeadsController {
    /// Spawn the controller on the current tokio runtime.
    ///
    /// `width` is the width of the containing view, used for the gesture
    /// physics. Returns the input handle and the render command stream.
    pub fn spawn(
        style: NotificationStyle,
        width: f32,
    ) -> (ChatHeadsHandle, mpsc::Receiver<RenderCommand>) {
        Self::spawn_with_delegate(style, width, None)
    }

    pub fn spawn_with_delegate(
        style: NotificationStyle,
        width: f32,
        delegate: Option<Arc<dyn ChatHeadsDelegate + Send + Sync>>,
    ) -> (ChatHeadsHandle, mpsc::Receiver<RenderCommand>) {
        let (tx, rx) = mpsc::channel(32);
        let (render_tx, render_rx) = mpsc::channel(32);

        let controller = Self {
            session: BubbleSession::new(style, width),
            generation: 0,
            tasks: BubbleTasks::default(),
            active: None,
            delegate,
            self_tx: tx.clone(),
            render_tx,
        };
        tokio::spawn(controller.run(rx));

        (ChatHeadsHandle { tx }, render_rx)
    }

    async fn run(mut self, mut rx: mpsc::Receiver<ControllerMessage>) {
        while let Some(msg) = rx.recv().await {
            let alive = match msg {
                ControllerMessage::Display(note) => self.display(note).await,
                ControllerMessage::Pan(event) => self.pan(event).await,
                ControllerMessage::Session { generation, event } => {
                    if generation == self.generation {
                        self.dispatch(event).await
                    } else {
                        tracing::trace!(generation, ?event, "Dropping stale completion");
                        true
                    }
                }
            };
            if !alive {
                break;
            }
        }
        self.tasks.abort_all();
        tracing::debug!("Chat heads controller stopped");
    }

    async fn display(&mut self, note: LocalNotification) -> bool {
        if self.session.state() != PresentationState::Hidden {
            // TODO: queue the notification and redisplay once hidden
            tracing::debug!(
                conversation = %note.conversation_id,
                "Chat head already on screen, dropping notification"
            );
            return true;
        }

        let Some(content) = ChatHeadContent::from_notification(&note) else {
            tracing::debug!(
                conversation = %note.conversation_id,
                "Notification has no displayable content"
            );
            return true;
        };

        if let Some(delegate) = &self.delegate {
            if !delegate.should_display(&note) {
                tracing::debug!(
                    conversation = %note.conversation_id,
                    "Delegate suppressed notification"
                );
                return true;
            }
        }

        // TODO: skip the bubble when the message is in the current
        // conversation (delegate.is_message_in_current_conversation)
        // TODO: route bubble taps through delegate.did_select

        tracing::debug!(sender = %note.sender_name, "Displaying chat head");
        self.active = Some(note);

        let effects = self.session.handle(SessionEvent::Trigger);
        let mounted = self
            .render(RenderCommand::ShowBubble {
                content,
                offset: self.session.offset_x(),
            })
            .await;
        mounted && self.apply(effects).await
    }

    async fn pan(&mut self, event: PanEvent) -> bool {
        let event = match event {
            PanEvent::Began => SessionEvent::DragBegan,
            PanEvent::Moved { dx } => SessionEvent::DragMoved { dx },
            PanEvent::Ended { dx, velocity_x } => SessionEvent::DragEnded { dx, velocity_x },
        };
        self.dispatch(event).await
    }

    async fn dispatch(&mut self, event: SessionEvent) -> bool {
        let effects = self.session.handle(event);
        self.apply(effects).await
    }

    async fn apply(&mut self, effects: Vec<Effect>) -> bool {
        for effect in effects {
            let alive = match effect {
                Effect::Reveal(anim) => {
                    self.complete_after(anim.total_duration(), SessionEvent::RevealFinished);
                    self.render(RenderCommand::Reveal(anim)).await
                }
                Effect::SetOffset(offset) => self.render(RenderCommand::SetOffset(offset)).await,
                Effect::ArmHideTimer(delay) => {
                    self.arm_hide_timer(delay);
                    true
                }
                Effect::HideOut(anim) => {
                    self.complete_after(anim.duration(), SessionEvent::HideFinished);
                    self.render(RenderCommand::HideOut(anim)).await
                }
                Effect::Destroy => {
                    if let Some(note) = self.active.take() {
                        tracing::debug!(conversation = %note.conversation_id, "Chat head dismissed");
                    }
                    self.generation += 1;
                    self.tasks.abort_all();
                    self.render(RenderCommand::RemoveBubble).await
                }
            };
            if !alive {
                return false;
            }
        }
        true
    }

    /// Post a completion event back into the loop after `delay`
    fn complete_after(&mut self, delay: Duration, event: SessionEvent) {
        let tx = self.self_tx.clone();
        let generation = self.generation;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ControllerMessage::Session { generation, event }).await;
        });
        self.tasks.track_animation(handle);
    }

    fn arm_hide_timer(&mut self, delay: Duration) {
        let tx = self.self_tx.clone();
        let generation = self.generation;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx
                .send(ControllerMessage::Session {
                    generation,
                    event: SessionEvent::HideTimerFired,
                })
                .await;
        });
        self.tasks.set_hide_timer(handle);
    }

    async fn render(&self, command: RenderCommand) -> bool {
        if self.render_tx.send(command).await.is_err() {
            tracing::debug!("Render channel closed, stopping controller");
            return false;
        }
        true
    }
}
