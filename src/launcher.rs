//! rofi bookmark/link launcher.
//!
//! Presents a configured list of `"Name - URL"` entries in a rofi dmenu and
//! opens the selection in a browser window or tab.  Configuration lives at
//! `$XDG_CONFIG_HOME/hyprkit/open.json`; a missing or malformed file falls
//! back to the compiled-in defaults.

use crate::config;
use crate::rofi;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::process::Command;

const PROMPT: &str = "Select link to open:";
const THEME_STR: &str = "window {width: 25%;} listview {columns: 1; lines: 6;}";

/// Launcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Browser binary to launch.
    pub browser: String,

    /// Open type used when none is given on the command line
    /// (`"window"`, `"tab"`, or empty for no default).
    pub default_open_type: String,

    /// `"Name - URL"` entries shown in the menu.
    pub options: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            browser: "zen-browser".to_string(),
            default_open_type: String::new(),
            options: vec![
                "Github - https://github.com".to_string(),
                "Youtube - https://youtube.com".to_string(),
                "Reddit - https://reddit.com".to_string(),
                "Hacker News - https://news.ycombinator.com".to_string(),
            ],
        }
    }
}

impl LauncherConfig {
    /// Load from the default location, falling back to compiled-in defaults.
    pub fn load_or_default() -> Self {
        let path = config::config_dir().join("open.json");
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(e) => {
                    debug!("cannot parse {} ({}), using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                debug!("no config file ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

/// One menu entry, split into display name and target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub name: String,
    /// `None` when the raw entry had no URL half.
    pub url: Option<String>,
}

impl LinkEntry {
    /// Split a raw `"Name - URL"` entry on the first `-`, trimming both
    /// halves.  An entry without a `-` is all name and no URL.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('-') {
            Some((name, url)) => {
                let url = url.trim();
                Self {
                    name: name.trim().to_string(),
                    url: (!url.is_empty()).then(|| url.to_string()),
                }
            }
            None => Self {
                name: raw.trim().to_string(),
                url: None,
            },
        }
    }
}

/// How the browser should open the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenType {
    Window,
    Tab,
}

impl OpenType {
    /// Parse an open type, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, LauncherError> {
        match s.trim().to_lowercase().as_str() {
            "window" => Ok(Self::Window),
            "tab" => Ok(Self::Tab),
            other => Err(LauncherError::InvalidOpenType(other.to_string())),
        }
    }
}

/// Errors from the launcher flow.  Every variant exits the binary with
/// status 1.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("invalid open type {0:?} (valid open types: window, tab)")]
    InvalidOpenType(String),

    #[error("no open type given and no default_open_type configured")]
    NoOpenType,

    #[error("no selection made")]
    NoSelection,

    #[error("could not find URL for selection {0:?}")]
    NoUrl(String),

    #[error(transparent)]
    Rofi(#[from] rofi::RofiError),

    #[error("cannot launch {browser}: {source}")]
    Browser {
        browser: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{browser} exited with {status}")]
    BrowserFailed {
        browser: String,
        status: std::process::ExitStatus,
    },
}

/// Run the launcher.  `open_type_arg` is the optional CLI argument, which
/// takes precedence over the configured default.
pub fn run(open_type_arg: Option<&str>) -> Result<(), LauncherError> {
    let config = LauncherConfig::load_or_default();

    let open_type = match open_type_arg {
        Some(arg) => OpenType::parse(arg)?,
        None if !config.default_open_type.is_empty() => {
            OpenType::parse(&config.default_open_type)?
        }
        None => return Err(LauncherError::NoOpenType),
    };

    let entries: Vec<LinkEntry> = config.options.iter().map(|s| LinkEntry::parse(s)).collect();
    let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();

    let selection = rofi::select(PROMPT, &names, &["-theme-str", THEME_STR])?
        .ok_or(LauncherError::NoSelection)?;

    let url = entries
        .iter()
        .find(|e| e.name == selection)
        .and_then(|e| e.url.as_deref())
        .ok_or_else(|| LauncherError::NoUrl(selection.clone()))?;

    info!("opening {}", url);
    open_in_browser(&config.browser, url, open_type)
}

fn open_in_browser(browser: &str, url: &str, open_type: OpenType) -> Result<(), LauncherError> {
    let mut cmd = Command::new(browser);
    if open_type == OpenType::Window {
        cmd.arg("--new-window");
    }
    cmd.arg(url);

    let status = cmd.status().map_err(|source| LauncherError::Browser {
        browser: browser.to_string(),
        source,
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(LauncherError::BrowserFailed {
            browser: browser.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_splits_on_first_hyphen() {
        let e = LinkEntry::parse("Github - https://github.com");
        assert_eq!(e.name, "Github");
        assert_eq!(e.url.as_deref(), Some("https://github.com"));
    }

    #[test]
    fn entry_url_may_contain_hyphens() {
        let e = LinkEntry::parse("Grafana - http://pve-main:3000");
        assert_eq!(e.name, "Grafana");
        assert_eq!(e.url.as_deref(), Some("http://pve-main:3000"));
    }

    #[test]
    fn hyphenated_name_splits_early() {
        // Matches the original entry format: the first hyphen wins.
        let e = LinkEntry::parse("Sci-Fi - https://scifi.example");
        assert_eq!(e.name, "Sci");
        assert_eq!(e.url.as_deref(), Some("Fi - https://scifi.example"));
    }

    #[test]
    fn entry_without_url_half() {
        let e = LinkEntry::parse("  Just a name  ");
        assert_eq!(e.name, "Just a name");
        assert_eq!(e.url, None);

        let e = LinkEntry::parse("Trailing - ");
        assert_eq!(e.name, "Trailing");
        assert_eq!(e.url, None);
    }

    #[test]
    fn open_type_parsing() {
        assert_eq!(OpenType::parse("window").unwrap(), OpenType::Window);
        assert_eq!(OpenType::parse(" TAB ").unwrap(), OpenType::Tab);
        assert!(matches!(
            OpenType::parse("popup"),
            Err(LauncherError::InvalidOpenType(_))
        ));
    }

    #[test]
    fn config_defaults() {
        let cfg: LauncherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.browser, "zen-browser");
        assert!(cfg.default_open_type.is_empty());
        assert!(!cfg.options.is_empty());
    }

    #[test]
    fn config_partial_override() {
        let cfg: LauncherConfig =
            serde_json::from_str(r#"{ "browser": "firefox", "default_open_type": "tab" }"#)
                .unwrap();
        assert_eq!(cfg.browser, "firefox");
        assert_eq!(cfg.default_open_type, "tab");
        assert!(!cfg.options.is_empty());
    }
}
