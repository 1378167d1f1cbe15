//! Hyprland-specific backends.
//!
//! [`monitors`] implements [`DisplayEnumerator`](crate::traits::DisplayEnumerator)
//! over Hyprland's IPC socket and [`hyprpaper`] implements
//! [`WallpaperApplier`](crate::traits::WallpaperApplier) over hyprpaper's
//! control socket.  [`ipc`] holds the shared socket plumbing.

pub mod hyprpaper;
pub mod ipc;
pub mod monitors;
