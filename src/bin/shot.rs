//! Entry point for **hyprkit-shot** — the screenshot menu.

use hyprkit::notify::DesktopNotifier;
use hyprkit::screenshot;
use log::error;

fn main() {
    env_logger::init();

    let notifier = DesktopNotifier::new("hyprkit-shot", "camera");
    if let Err(e) = screenshot::run(&notifier) {
        error!("{}", e);
        std::process::exit(1);
    }
}
