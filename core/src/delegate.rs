//! Collaborator contract for routing chat head decisions into the app

use crate::notification::LocalNotification;

/// Hooks the hosting application provides to the chat head controller.
///
/// Declared but not yet consulted in this revision; the controller carries
/// the delegate so wiring it up is a local change.
pub trait ChatHeadsDelegate {
    /// Whether the notification should be shown at all
    fn should_display(&self, note: &LocalNotification) -> bool;

    /// Whether the message belongs to the conversation currently on screen
    fn is_message_in_current_conversation(&self, note: &LocalNotification) -> bool;

    /// The user tapped the bubble
    fn did_select(&self, note: &LocalNotification);
}
