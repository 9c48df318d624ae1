//! Handles for the controller's scheduled work

use tokio::task::JoinHandle;

/// Timer and animation tasks owned by the active bubble
#[derive(Default)]
pub struct BubbleTasks {
    hide_timer: Option<JoinHandle<()>>,
    animations: Vec<JoinHandle<()>>,
}

impl BubbleTasks {
    /// Arm the auto-hide timer, cancelling any pending instance
    pub fn set_hide_timer(&mut self, handle: JoinHandle<()>) {
        self.cancel_hide_timer();
        self.hide_timer = Some(handle);
    }

    pub fn cancel_hide_timer(&mut self) {
        if let Some(handle) = self.hide_timer.take() {
            handle.abort();
        }
    }

    /// Track an animation-completion task for the current bubble
    pub fn track_animation(&mut self, handle: JoinHandle<()>) {
        self.animations.retain(|h| !h.is_finished());
        self.animations.push(handle);
    }

    pub fn abort_all(&mut self) {
        self.cancel_hide_timer();
        for handle in self.animations.drain(..) {
            handle.abort();
        }
    }
}
