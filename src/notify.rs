//! Desktop notifications over D-Bus.
//!
//! Implements [`Notifier`] with the `notify-rust` crate, so no `notify-send`
//! binary is involved.  Wallpaper and screenshot notifications pass the image
//! itself as the icon; everything else falls back to a themed icon name.

use crate::traits::{Notifier, Urgency};
use notify_rust::Notification;
use std::path::Path;

/// Error from posting a notification.
#[derive(Debug, thiserror::Error)]
#[error("notification error: {0}")]
pub struct NotifyError(String);

/// [`Notifier`] backed by the desktop notification daemon.
pub struct DesktopNotifier {
    app_name: String,
    fallback_icon: String,
}

impl DesktopNotifier {
    /// `app_name` doubles as the notification summary; `fallback_icon` is a
    /// themed icon name used when no image icon is supplied.
    pub fn new(app_name: &str, fallback_icon: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            fallback_icon: fallback_icon.to_string(),
        }
    }
}

impl Notifier for DesktopNotifier {
    type Error = NotifyError;

    fn notify(
        &self,
        body: &str,
        urgency: Urgency,
        icon: Option<&Path>,
    ) -> Result<(), Self::Error> {
        let icon = icon
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.fallback_icon.clone());

        Notification::new()
            .appname(&self.app_name)
            .summary(&self.app_name)
            .body(body)
            .icon(&icon)
            .urgency(match urgency {
                Urgency::Normal => notify_rust::Urgency::Normal,
                Urgency::Critical => notify_rust::Urgency::Critical,
            })
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError(e.to_string()))
    }
}
