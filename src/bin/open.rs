//! Entry point for **hyprkit-open** — the rofi link launcher.

use hyprkit::launcher::{self, LauncherError};
use log::error;

fn main() {
    env_logger::init();

    let open_type = std::env::args().nth(1);
    if let Err(e) = launcher::run(open_type.as_deref()) {
        match e {
            LauncherError::NoOpenType => {
                eprintln!("Usage: hyprkit-open <window|tab>");
                eprintln!("Or set \"default_open_type\" in your config file.");
            }
            other => error!("{}", other),
        }
        std::process::exit(1);
    }
}
