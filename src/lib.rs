//! **hyprkit** — personal desktop utilities for Hyprland.
//!
//! Three binaries share this crate:
//!
//! * `hyprkit-wallpaper` — picks a random configured topic, fetches a
//!   matching wallpaper from the Wallhaven API, prunes old downloads,
//!   rescales to the active displays, and applies it via hyprpaper.
//! * `hyprkit-open` — a rofi-dmenu bookmark launcher.
//! * `hyprkit-shot` — a rofi-fronted screenshot menu over grim/slurp.
//!
//! # Architecture
//!
//! The wallpaper core never talks to the OS directly; it depends on three
//! narrow traits:
//!
//! * [`traits::DisplayEnumerator`] — which outputs are active and how big
//!   they are.
//! * [`traits::WallpaperApplier`] — preload / apply / reload against the
//!   compositor's wallpaper daemon.
//! * [`traits::Notifier`] — desktop notifications.
//!
//! Concrete implementations live in [`hyprland`] (direct Hyprland and
//! hyprpaper socket IPC) and [`notify`] (D-Bus notifications), so the
//! retention, selection, and apply logic in [`changer`] is testable without
//! a compositor.

pub mod changer;
pub mod config;
pub mod hyprland;
pub mod launcher;
pub mod notify;
pub mod resize;
pub mod retention;
pub mod rofi;
pub mod screenshot;
pub mod topic;
pub mod traits;
pub mod wallhaven;
