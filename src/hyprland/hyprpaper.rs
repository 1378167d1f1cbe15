//! [`WallpaperApplier`] backed by hyprpaper's control socket.
//!
//! hyprpaper accepts plain-text commands (`preload <path>`,
//! `wallpaper <monitor>,<path>`, `reload`) and answers `ok` on success.
//! An empty monitor name applies the wallpaper to every output.

use super::ipc::{self, IpcError};
use crate::traits::WallpaperApplier;
use log::debug;
use std::path::Path;

/// hyprpaper handle.  Each call opens a short-lived socket request.
pub struct Hyprpaper;

impl Default for Hyprpaper {
    fn default() -> Self {
        Self
    }
}

impl Hyprpaper {
    pub fn new() -> Self {
        Self
    }

    fn command(&self, payload: &str) -> Result<(), IpcError> {
        let socket = ipc::hyprpaper_socket()?;
        let response = ipc::request(&socket, payload)?;
        debug!("hyprpaper {:?} -> {:?}", payload, response.trim());
        if response.trim() == "ok" {
            Ok(())
        } else {
            Err(IpcError(format!("hyprpaper: {}", response.trim())))
        }
    }
}

fn preload_command(path: &Path) -> String {
    format!("preload {}", path.display())
}

fn wallpaper_command(display: Option<&str>, path: &Path) -> String {
    format!("wallpaper {},{}", display.unwrap_or(""), path.display())
}

impl WallpaperApplier for Hyprpaper {
    type Error = IpcError;

    fn preload(&self, path: &Path) -> Result<(), Self::Error> {
        self.command(&preload_command(path))
    }

    fn apply(&self, display: Option<&str>, path: &Path) -> Result<(), Self::Error> {
        self.command(&wallpaper_command(display, path))
    }

    fn reload(&self) -> Result<(), Self::Error> {
        self.command("reload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preload_wire_format() {
        assert_eq!(
            preload_command(Path::new("/walls/a.jpg")),
            "preload /walls/a.jpg"
        );
    }

    #[test]
    fn wallpaper_wire_format_per_display() {
        assert_eq!(
            wallpaper_command(Some("DP-1"), Path::new("/walls/a.jpg")),
            "wallpaper DP-1,/walls/a.jpg"
        );
    }

    #[test]
    fn wallpaper_wire_format_all_displays() {
        // Empty monitor name targets every output.
        assert_eq!(
            wallpaper_command(None, Path::new("/walls/a.jpg")),
            "wallpaper ,/walls/a.jpg"
        );
    }
}
