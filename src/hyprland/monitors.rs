//! Display queries over Hyprland IPC.
//!
//! Backs two consumers: the wallpaper changer asks for active outputs (to
//! size the resize target and fan out apply calls), and the screenshot tool
//! asks for the focused window's geometry in `slurp`/`grim` form.

use super::ipc::{self, IpcError};
use crate::traits::{DisplayEnumerator, DisplayInfo};
use serde::Deserialize;

/// [`DisplayEnumerator`] backed by Hyprland's `j/monitors` query.
///
/// No connection is opened eagerly; each call opens a short-lived IPC
/// request.
pub struct HyprlandDisplays;

impl Default for HyprlandDisplays {
    fn default() -> Self {
        Self
    }
}

impl HyprlandDisplays {
    pub fn new() -> Self {
        Self
    }
}

/// Subset of the JSON object returned by `j/monitors`.
#[derive(Deserialize)]
struct MonitorJson {
    name: String,
    width: u32,
    height: u32,
}

fn parse_monitors(json: &str) -> Result<Vec<DisplayInfo>, IpcError> {
    let monitors: Vec<MonitorJson> =
        serde_json::from_str(json).map_err(|e| IpcError(format!("parse: {}", e)))?;
    Ok(monitors
        .into_iter()
        .map(|m| DisplayInfo {
            name: m.name,
            width: m.width,
            height: m.height,
        })
        .collect())
}

impl DisplayEnumerator for HyprlandDisplays {
    type Error = IpcError;

    fn displays(&self) -> Result<Vec<DisplayInfo>, Self::Error> {
        parse_monitors(&ipc::json_query("monitors")?)
    }
}

//  Active window geometry

/// Subset of the JSON object returned by `j/activewindow`.
#[derive(Deserialize)]
struct ActiveWindowJson {
    at: [i32; 2],
    size: [i32; 2],
}

impl ActiveWindowJson {
    /// `"x,y WxH"` — the region format `slurp` emits and `grim -g` accepts.
    fn geometry(&self) -> String {
        format!(
            "{},{} {}x{}",
            self.at[0], self.at[1], self.size[0], self.size[1]
        )
    }
}

/// The focused window's capture region, or `None` when no window is focused.
///
/// Hyprland returns an empty object `{}` when nothing has focus.
pub fn active_window_geometry() -> Result<Option<String>, IpcError> {
    let json = ipc::json_query("activewindow")?;
    if json.trim() == "{}" {
        return Ok(None);
    }
    let window: ActiveWindowJson =
        serde_json::from_str(&json).map_err(|e| IpcError(format!("parse: {}", e)))?;
    Ok(Some(window.geometry()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_monitors_maps_the_fields_we_need() {
        let json = r#"[
            { "id": 0, "name": "DP-1", "width": 2560, "height": 1440, "x": 0, "y": 0, "focused": true },
            { "id": 1, "name": "HDMI-A-1", "width": 1920, "height": 1080, "x": 2560, "y": 0 }
        ]"#;
        let displays = parse_monitors(json).unwrap();
        assert_eq!(displays.len(), 2);
        assert_eq!(displays[0].name, "DP-1");
        assert_eq!((displays[0].width, displays[0].height), (2560, 1440));
        assert_eq!(displays[1].name, "HDMI-A-1");
    }

    #[test]
    fn parse_monitors_empty_list() {
        assert!(parse_monitors("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_monitors_rejects_garbage() {
        assert!(parse_monitors("not json").is_err());
    }

    #[test]
    fn window_geometry_is_slurp_formatted() {
        let json = r#"{ "at": [10, 20], "size": [300, 200], "title": "Terminal" }"#;
        let window: ActiveWindowJson = serde_json::from_str(json).unwrap();
        assert_eq!(window.geometry(), "10,20 300x200");
    }
}
