//! Screenshot menu.
//!
//! A rofi menu fronting `grim`/`slurp` captures: save a region, copy a
//! region to the clipboard, grab the whole screen or the focused window, or
//! hand a region straight to `swappy` for annotation.  Saved captures go
//! through a `zenity` file dialog; clipboard and save flows notify with a
//! thumbnail of the capture.
//!
//! The focused-window geometry comes from Hyprland IPC rather than shelling
//! out, and thumbnails are produced with the image library rather than
//! ImageMagick.

use crate::hyprland::monitors;
use crate::rofi;
use crate::traits::{Notifier, Urgency};
use image::imageops::FilterType;
use log::warn;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// External tools the menu shells out to.
pub const REQUIRED_TOOLS: &[&str] = &["grim", "slurp", "rofi", "zenity", "wl-copy", "swappy"];

const PROMPT: &str = "Enter option or select from the list";
const MESSAGE: &str = "Select a Screenshot Option";
const THEME_STR: &str = "listview {columns: 2; lines: 3;} window {width: 55%;}";

/// Errors that abort the run with a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum ScreenshotError {
    #[error("{0} is not installed. Please install it first.")]
    MissingTool(&'static str),

    #[error(transparent)]
    Rofi(#[from] rofi::RofiError),

    #[error("screenshot failed: {0}")]
    Capture(String),
}

/// The menu actions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RegionSave,
    RegionClipboard,
    FullScreen,
    CurrentWindow,
    RegionEdit,
    Quit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::RegionSave,
        Action::RegionClipboard,
        Action::FullScreen,
        Action::CurrentWindow,
        Action::RegionEdit,
        Action::Quit,
    ];

    pub fn menu_label(self) -> &'static str {
        match self {
            Action::RegionSave => "1. Select a region and save",
            Action::RegionClipboard => "2. Select a region and copy to clipboard",
            Action::FullScreen => "3. Whole screen",
            Action::CurrentWindow => "4. Current window",
            Action::RegionEdit => "5. Edit",
            Action::Quit => "6. Quit",
        }
    }

    /// Map a rofi `-format i` index back to an action.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Verify every required external tool is on `PATH`.
pub fn check_dependencies() -> Result<(), ScreenshotError> {
    let path = std::env::var_os("PATH").unwrap_or_default();
    for &tool in REQUIRED_TOOLS {
        if !on_path(tool, &path) {
            return Err(ScreenshotError::MissingTool(tool));
        }
    }
    Ok(())
}

fn on_path(name: &str, path: &OsStr) -> bool {
    std::env::split_paths(path).any(|dir| dir.join(name).is_file())
}

/// Run the screenshot menu.
///
/// A dismissed menu or cancelled save dialog is a normal outcome (`Ok`);
/// only missing tools and failed captures are errors.
pub fn run<N: Notifier>(notifier: &N) -> Result<(), ScreenshotError> {
    check_dependencies()?;

    let lines: Vec<String> = Action::ALL
        .iter()
        .map(|a| a.menu_label().to_string())
        .collect();
    let picked = rofi::select_index(
        PROMPT,
        &lines,
        &[
            "-mesg",
            MESSAGE,
            "-theme-str",
            THEME_STR,
            "-no-custom",
            "-a",
            "0",
        ],
    )?;

    let Some(action) = picked.and_then(Action::from_index) else {
        notify(notifier, "No option selected.", None);
        return Ok(());
    };
    if action == Action::Quit {
        return Ok(());
    }

    // Let the rofi window close before the capture grabs the screen.
    thread::sleep(Duration::from_millis(200));

    // What happens to the capture once the action itself succeeds.
    enum Followup {
        SaveDialog,
        ClipboardNotice,
        Nothing,
    }

    let tmp = std::env::temp_dir().join("screenshot.png");
    let outcome = match action {
        Action::RegionSave => capture_region(&tmp).map(|()| Followup::SaveDialog),
        Action::FullScreen => capture_full(&tmp).map(|()| Followup::SaveDialog),
        Action::CurrentWindow => capture_window(&tmp).map(|()| Followup::SaveDialog),
        Action::RegionClipboard => capture_region(&tmp)
            .and_then(|()| copy_to_clipboard(&tmp))
            .map(|()| Followup::ClipboardNotice),
        Action::RegionEdit => edit_region().map(|()| Followup::Nothing),
        Action::Quit => unreachable!("handled above"),
    };

    match outcome {
        Ok(Followup::SaveDialog) => {
            save_flow(notifier, &tmp);
            Ok(())
        }
        Ok(Followup::ClipboardNotice) => {
            notify_with_thumbnail(notifier, &tmp, "Screenshot copied to clipboard");
            Ok(())
        }
        Ok(Followup::Nothing) => Ok(()),
        Err(e) => {
            notify(notifier, "An error occurred while taking the screenshot.", None);
            Err(e)
        }
    }
}

//  Capture primitives

/// Ask slurp for a region.  A cancelled selection is a capture failure.
fn select_region() -> Result<String, ScreenshotError> {
    let output = Command::new("slurp")
        .output()
        .map_err(|e| ScreenshotError::Capture(format!("slurp: {}", e)))?;
    if !output.status.success() {
        return Err(ScreenshotError::Capture("region selection cancelled".into()));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn grim(args: &[&str], dest: Option<&Path>) -> Result<(), ScreenshotError> {
    let mut cmd = Command::new("grim");
    cmd.args(args);
    if let Some(dest) = dest {
        cmd.arg(dest);
    }
    let status = cmd
        .status()
        .map_err(|e| ScreenshotError::Capture(format!("grim: {}", e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(ScreenshotError::Capture(format!("grim exited with {}", status)))
    }
}

fn capture_region(dest: &Path) -> Result<(), ScreenshotError> {
    let geometry = select_region()?;
    grim(&["-g", &geometry], Some(dest))
}

fn capture_full(dest: &Path) -> Result<(), ScreenshotError> {
    grim(&[], Some(dest))
}

fn capture_window(dest: &Path) -> Result<(), ScreenshotError> {
    let geometry = monitors::active_window_geometry()
        .map_err(|e| ScreenshotError::Capture(format!("active window: {}", e)))?
        .ok_or_else(|| ScreenshotError::Capture("no focused window".into()))?;
    grim(&["-g", &geometry], Some(dest))
}

fn copy_to_clipboard(path: &Path) -> Result<(), ScreenshotError> {
    let file = fs::File::open(path)
        .map_err(|e| ScreenshotError::Capture(format!("open {}: {}", path.display(), e)))?;
    let status = Command::new("wl-copy")
        .stdin(Stdio::from(file))
        .status()
        .map_err(|e| ScreenshotError::Capture(format!("wl-copy: {}", e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(ScreenshotError::Capture(format!(
            "wl-copy exited with {}",
            status
        )))
    }
}

/// Pipe a region capture straight into swappy for annotation.
fn edit_region() -> Result<(), ScreenshotError> {
    let geometry = select_region()?;
    let mut grim_child = Command::new("grim")
        .args(["-g", &geometry, "-"])
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| ScreenshotError::Capture(format!("grim: {}", e)))?;
    let grim_out = grim_child
        .stdout
        .take()
        .ok_or_else(|| ScreenshotError::Capture("grim produced no output pipe".into()))?;

    let swappy_status = Command::new("swappy")
        .args(["-f", "-"])
        .stdin(Stdio::from(grim_out))
        .status()
        .map_err(|e| ScreenshotError::Capture(format!("swappy: {}", e)))?;
    let _ = grim_child.wait();

    if swappy_status.success() {
        Ok(())
    } else {
        Err(ScreenshotError::Capture(format!(
            "swappy exited with {}",
            swappy_status
        )))
    }
}

//  Save flow

fn save_flow<N: Notifier>(notifier: &N, capture: &Path) {
    notify(
        notifier,
        "Screenshot saved temporarily.\nChoose where to save it permanently",
        None,
    );

    let Some(dest) = save_dialog() else {
        let _ = fs::remove_file(capture);
        notify(notifier, "Screenshot discarded", None);
        return;
    };

    if !capture.exists() {
        notify(
            notifier,
            &format!("Screenshot file {} does not exist. Save failed.", capture.display()),
            None,
        );
    } else if let Err(e) = move_file(capture, &dest) {
        warn!("cannot move capture to {}: {}", dest.display(), e);
        notify(
            notifier,
            &format!("Failed to save screenshot to {}", dest.display()),
            None,
        );
    } else {
        notify_with_thumbnail(
            notifier,
            &dest,
            &format!("Screenshot saved to {}", dest.display()),
        );
    }
}

/// zenity save dialog; `None` when cancelled.
fn save_dialog() -> Option<PathBuf> {
    let output = Command::new("zenity")
        .args([
            "--file-selection",
            "--title=Save Screenshot",
            "--filename=screenshot.png",
            "--save",
        ])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let dest = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if dest.is_empty() {
        None
    } else {
        Some(PathBuf::from(dest))
    }
}

/// Copy-then-remove, so moves work across filesystems.
fn move_file(src: &Path, dest: &Path) -> std::io::Result<()> {
    fs::copy(src, dest)?;
    fs::remove_file(src)
}

//  Notifications

fn notify<N: Notifier>(notifier: &N, body: &str, icon: Option<&Path>) {
    if let Err(e) = notifier.notify(body, Urgency::Normal, icon) {
        warn!("notification failed: {}", e);
    }
}

fn notify_with_thumbnail<N: Notifier>(notifier: &N, capture: &Path, body: &str) {
    match thumbnail(capture) {
        Some(icon) => {
            notify(notifier, body, Some(&icon));
            let _ = fs::remove_file(icon);
        }
        None => notify(notifier, body, Some(capture)),
    }
}

/// 128×128 cover-crop thumbnail beside the capture, or `None` on any
/// decode/encode failure (the caller falls back to the full image).
fn thumbnail(capture: &Path) -> Option<PathBuf> {
    let img = image::open(capture).ok()?;
    let icon = img.resize_to_fill(128, 128, FilterType::Triangle);
    let mut name = capture.file_name()?.to_os_string();
    name.push(".icon.png");
    let path = capture.with_file_name(name);
    icon.save_with_format(&path, image::ImageFormat::Png).ok()?;
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn menu_indices_map_to_actions() {
        assert_eq!(Action::from_index(0), Some(Action::RegionSave));
        assert_eq!(Action::from_index(3), Some(Action::CurrentWindow));
        assert_eq!(Action::from_index(5), Some(Action::Quit));
        assert_eq!(Action::from_index(6), None);
    }

    #[test]
    fn menu_labels_are_numbered_in_order() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert!(action.menu_label().starts_with(&format!("{}.", i + 1)));
        }
    }

    #[test]
    fn on_path_finds_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sometool"), b"#!/bin/sh\n").unwrap();
        let path = std::env::join_paths([dir.path()]).unwrap();
        assert!(on_path("sometool", &path));
        assert!(!on_path("othertool", &path));
    }

    #[test]
    fn move_file_replaces_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.png");
        let dest = dir.path().join("dest.png");
        fs::write(&src, b"data").unwrap();

        move_file(&src, &dest).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"data");
    }

    #[test]
    fn thumbnail_is_a_128_square() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("shot.png");
        RgbImage::new(64, 32).save(&capture).unwrap();

        let icon = thumbnail(&capture).unwrap();
        assert_eq!(icon, dir.path().join("shot.png.icon.png"));
        let img = image::open(&icon).unwrap();
        assert_eq!((img.width(), img.height()), (128, 128));
    }

    #[test]
    fn thumbnail_of_garbage_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("not-an-image.png");
        fs::write(&capture, b"nope").unwrap();
        assert!(thumbnail(&capture).is_none());
    }
}
