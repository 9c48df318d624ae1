//! Tests for the chat heads controller under paused tokio time
//!
//! Verifies that:
//! - A displayed bubble auto-hides after the configured duration
//! - Empty notifications and delegate refusals suppress display
//! - Drag release past the threshold flings the bubble off screen
//! - The auto-hide timer keeps rescheduling while a drag is held

use std::sync::Arc;
use std::time::Duration;

use chathead_core::{ChatHeadsDelegate, LocalNotification, NotificationStyle};

use crate::controller::{ChatHeadsController, PanEvent, RenderCommand};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

const WIDTH: f32 = 300.0;

fn style() -> NotificationStyle {
    NotificationStyle {
        animation_inset_container: 48.0,
        animation_inset_text: 16.0,
        single_user_duration: 4.0,
        gesture_threshold: 40.0,
    }
}

fn note(body: &str) -> LocalNotification {
    LocalNotification::new("conv-1", "Alice", body)
}

/// Delegate refusing notifications whose body is "spam"
struct RefuseSpam;

impl ChatHeadsDelegate for RefuseSpam {
    fn should_display(&self, note: &LocalNotification) -> bool {
        note.body != "spam"
    }

    fn is_message_in_current_conversation(&self, _note: &LocalNotification) -> bool {
        false
    }

    fn did_select(&self, _note: &LocalNotification) {}
}

// ═══════════════════════════════════════════════════════════════════════════
// Display & Auto-Hide
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test(start_paused = true)]
async fn display_then_auto_hide() {
    let (handle, mut render) = ChatHeadsController::spawn(style(), WIDTH);
    handle.try_display(note("hello")).await.unwrap();

    match render.recv().await.unwrap() {
        RenderCommand::ShowBubble { content, offset } => {
            assert_eq!(content.title, "Alice");
            assert_eq!(offset, -48.0);
        }
        other => panic!("expected ShowBubble, got {other:?}"),
    }
    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::Reveal(_)
    ));

    // Paused time auto-advances through the reveal and the 4s hide delay
    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::HideOut(_)
    ));
    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::RemoveBubble
    ));
}

#[tokio::test(start_paused = true)]
async fn bubble_is_displayable_again_after_hide() {
    let (handle, mut render) = ChatHeadsController::spawn(style(), WIDTH);

    handle.try_display(note("first")).await.unwrap();
    let mut removed = false;
    while !removed {
        removed = matches!(render.recv().await.unwrap(), RenderCommand::RemoveBubble);
    }

    handle.try_display(note("second")).await.unwrap();
    match render.recv().await.unwrap() {
        RenderCommand::ShowBubble { content, .. } => assert_eq!(content.text, "second"),
        other => panic!("expected ShowBubble, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn blank_notification_is_suppressed() {
    let (handle, mut render) = ChatHeadsController::spawn(style(), WIDTH);

    handle.try_display(note("   ")).await.unwrap();
    handle.try_display(note("hi")).await.unwrap();

    // The blank notification produced nothing; the first command on the
    // stream belongs to the second display request.
    match render.recv().await.unwrap() {
        RenderCommand::ShowBubble { content, .. } => assert_eq!(content.text, "hi"),
        other => panic!("expected ShowBubble, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn delegate_refusal_suppresses_display() {
    let (handle, mut render) =
        ChatHeadsController::spawn_with_delegate(style(), WIDTH, Some(Arc::new(RefuseSpam)));

    handle.try_display(note("spam")).await.unwrap();
    handle.try_display(note("hello")).await.unwrap();

    // The refused notification produced nothing; the first command on the
    // stream belongs to the accepted one.
    match render.recv().await.unwrap() {
        RenderCommand::ShowBubble { content, .. } => assert_eq!(content.text, "hello"),
        other => panic!("expected ShowBubble, got {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Drag Dismissal
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test(start_paused = true)]
async fn drag_release_past_threshold_dismisses() {
    let (handle, mut render) = ChatHeadsController::spawn(style(), WIDTH);
    handle.try_display(note("hello")).await.unwrap();

    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::ShowBubble { .. }
    ));
    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::Reveal(_)
    ));

    handle.pan(PanEvent::Began).await.unwrap();
    handle.pan(PanEvent::Moved { dx: -100.0 }).await.unwrap();
    assert_eq!(
        render.recv().await.unwrap(),
        RenderCommand::SetOffset(-100.0)
    );

    handle
        .pan(PanEvent::Ended {
            dx: -100.0,
            velocity_x: -1000.0,
        })
        .await
        .unwrap();

    match render.recv().await.unwrap() {
        RenderCommand::HideOut(anim) => {
            // (300 - 100) / 1000 lands exactly on the 0.2s cap
            assert_eq!(anim.spec.duration, 0.2);
            assert_eq!(anim.to_offset, -WIDTH);
        }
        other => panic!("expected HideOut, got {other:?}"),
    }
    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::RemoveBubble
    ));
}

#[tokio::test(start_paused = true)]
async fn hide_timer_reschedules_while_dragging() {
    let (handle, mut render) = ChatHeadsController::spawn(style(), WIDTH);
    handle.try_display(note("hello")).await.unwrap();

    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::ShowBubble { .. }
    ));
    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::Reveal(_)
    ));

    // Let the reveal settle so the hide timer is armed
    tokio::time::sleep(Duration::from_millis(700)).await;

    handle.pan(PanEvent::Began).await.unwrap();

    // Hold the drag through several auto-hide periods; the timer must keep
    // rescheduling itself instead of hiding mid-interaction.
    let held = tokio::time::timeout(Duration::from_secs(15), render.recv()).await;
    assert!(held.is_err(), "bubble must not hide while dragged");

    // Release within the threshold: snap back
    handle
        .pan(PanEvent::Ended {
            dx: -10.0,
            velocity_x: 0.0,
        })
        .await
        .unwrap();
    assert!(matches!(
        render.recv().await.unwrap(),
        RenderCommand::Reveal(_)
    ));
}
