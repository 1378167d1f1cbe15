//! Collaborator seams that decouple the wallpaper changer from the OS.
//!
//! Every interaction with the outside desktop — enumerating monitors,
//! driving hyprpaper, raising notifications — goes through one of these
//! traits.  Concrete implementations live in [`crate::hyprland`] and
//! [`crate::notify`]; tests substitute in-memory doubles, so the retention,
//! selection, and apply logic never needs a compositor or a D-Bus session.

use std::path::Path;

/// Static information about one active display output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Output name as the compositor reports it (e.g. `"DP-1"`).
    pub name: String,
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
}

/// Enumerates the currently active displays.
pub trait DisplayEnumerator {
    /// The error type produced by this enumerator.
    type Error: std::error::Error + Send + 'static;

    /// Return every active display output.
    fn displays(&self) -> Result<Vec<DisplayInfo>, Self::Error>;
}

/// Sets wallpapers on the running compositor.
///
/// The contract mirrors hyprpaper's command set: images are preloaded,
/// applied per display (or globally), and the daemon is asked to reload.
pub trait WallpaperApplier {
    /// The error type produced by this applier.
    type Error: std::error::Error + Send + 'static;

    /// Make `path` available for application.
    fn preload(&self, path: &Path) -> Result<(), Self::Error>;

    /// Apply `path` to the named display, or to every display when
    /// `display` is `None`.
    fn apply(&self, display: Option<&str>, path: &Path) -> Result<(), Self::Error>;

    /// Ask the compositor's wallpaper daemon to reload its state.
    fn reload(&self) -> Result<(), Self::Error>;
}

/// Notification urgency, mapped onto the freedesktop urgency levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Critical,
}

/// Raises desktop notifications.
pub trait Notifier {
    /// The error type produced by this notifier.
    type Error: std::error::Error + Send + 'static;

    /// Show `body` at the given urgency, optionally with an image icon.
    fn notify(&self, body: &str, urgency: Urgency, icon: Option<&Path>)
        -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    /// A test double that records every applier call made to it.
    #[derive(Debug, Default)]
    struct MockApplier {
        calls: RefCell<Vec<String>>,
    }

    impl WallpaperApplier for MockApplier {
        type Error = MockError;

        fn preload(&self, path: &Path) -> Result<(), MockError> {
            self.calls
                .borrow_mut()
                .push(format!("preload {}", path.display()));
            Ok(())
        }

        fn apply(&self, display: Option<&str>, path: &Path) -> Result<(), MockError> {
            self.calls
                .borrow_mut()
                .push(format!("apply {},{}", display.unwrap_or(""), path.display()));
            Ok(())
        }

        fn reload(&self) -> Result<(), MockError> {
            self.calls.borrow_mut().push("reload".into());
            Ok(())
        }
    }

    #[test]
    fn mock_applier_records_calls() {
        let applier = MockApplier::default();
        let wall = PathBuf::from("/walls/a.jpg");
        applier.preload(&wall).unwrap();
        applier.apply(Some("DP-1"), &wall).unwrap();
        applier.apply(None, &wall).unwrap();
        applier.reload().unwrap();
        assert_eq!(
            *applier.calls.borrow(),
            vec![
                "preload /walls/a.jpg",
                "apply DP-1,/walls/a.jpg",
                "apply ,/walls/a.jpg",
                "reload",
            ]
        );
    }

    struct FixedDisplays(Vec<DisplayInfo>);

    impl DisplayEnumerator for FixedDisplays {
        type Error = MockError;

        fn displays(&self) -> Result<Vec<DisplayInfo>, MockError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn fixed_enumerator_returns_its_displays() {
        let e = FixedDisplays(vec![DisplayInfo {
            name: "DP-1".into(),
            width: 2560,
            height: 1440,
        }]);
        let displays = e.displays().unwrap();
        assert_eq!(displays.len(), 1);
        assert_eq!(displays[0].name, "DP-1");
    }
}
