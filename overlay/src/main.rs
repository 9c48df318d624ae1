//! Example application demonstrating the chat head lifecycle
//!
//! This is a standalone demo that drives the controller with a scripted
//! interaction: one notification auto-hides, a second one is drag-dismissed.
//! Render commands are logged instead of drawn. In production the stream
//! feeds the host application's renderer.

use std::time::Duration;

use chathead_core::{LocalNotification, NotificationStyle};
use chathead_overlay::{ChatHeadsController, ControllerError, PanEvent, RenderCommand};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ControllerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let style = NotificationStyle::load();
    let (handle, mut render) = ChatHeadsController::spawn(style, 375.0);

    let renderer = tokio::spawn(async move {
        while let Some(command) = render.recv().await {
            match command {
                RenderCommand::ShowBubble { content, offset } => {
                    tracing::info!(title = %content.title, text = %content.text, offset, "Show bubble");
                }
                RenderCommand::Reveal(anim) => {
                    tracing::info!(from = anim.from_offset, "Reveal");
                }
                RenderCommand::SetOffset(offset) => {
                    tracing::info!(offset, "Move");
                }
                RenderCommand::HideOut(anim) => {
                    tracing::info!(secs = anim.spec.duration, to = anim.to_offset, "Hide");
                }
                RenderCommand::RemoveBubble => {
                    tracing::info!("Remove bubble");
                }
            }
        }
    });

    // First notification runs the full reveal + auto-hide cycle
    handle
        .try_display(LocalNotification::new("conv-1", "Alice", "See you at 8?"))
        .await?;
    tokio::time::sleep(Duration::from_secs(6)).await;

    // Second one gets dragged off screen
    handle
        .try_display(LocalNotification::new("conv-2", "Bob", "On my way"))
        .await?;
    tokio::time::sleep(Duration::from_secs(1)).await;

    handle.pan(PanEvent::Began).await?;
    for dx in [-20.0, -45.0, -80.0] {
        handle.pan(PanEvent::Moved { dx }).await?;
        tokio::time::sleep(Duration::from_millis(30)).await;
    }
    handle
        .pan(PanEvent::Ended {
            dx: -80.0,
            velocity_x: -900.0,
        })
        .await?;
    tokio::time::sleep(Duration::from_millis(500)).await;

    renderer.abort();
    Ok(())
}
