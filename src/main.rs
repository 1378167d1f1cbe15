//! Entry point for **hyprkit-wallpaper**.
//!
//! With no arguments, runs the full flow: prune the download pool, pick a
//! topic, fetch a wallpaper from Wallhaven, rescale it to the active
//! displays, and apply it via hyprpaper.  With a single argument naming an
//! existing file, applies that file directly and skips the fetch entirely.

use hyprkit::changer::WallpaperChanger;
use hyprkit::config::WallpaperConfig;
use hyprkit::hyprland::hyprpaper::Hyprpaper;
use hyprkit::hyprland::monitors::HyprlandDisplays;
use hyprkit::notify::DesktopNotifier;
use hyprkit::traits::{Notifier, Urgency};
use log::error;
use std::path::Path;

const APP_NAME: &str = "hyprkit-wallpaper";
const FALLBACK_ICON: &str = "hyprpaper";

fn main() {
    env_logger::init();

    let changer = WallpaperChanger::new(
        HyprlandDisplays::new(),
        Hyprpaper::new(),
        DesktopNotifier::new(APP_NAME, FALLBACK_ICON),
    );

    // A single existing-file argument is applied as-is; anything else falls
    // through to the fetch flow.
    if let Some(arg) = std::env::args().nth(1) {
        let path = Path::new(&arg);
        if path.is_file() {
            changer.apply(path, None);
            return;
        }
    }

    let config = WallpaperConfig::load_or_default();
    if let Err(e) = changer.fetch_and_apply(&config) {
        error!("{}", e);
        let notifier = DesktopNotifier::new(APP_NAME, FALLBACK_ICON);
        if let Err(notify_err) =
            notifier.notify("Failed to download new wallpaper", Urgency::Critical, None)
        {
            error!("notification failed: {}", notify_err);
        }
        std::process::exit(1);
    }
}
