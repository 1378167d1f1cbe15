//! Low-level Hyprland IPC plumbing.
//!
//! Communicates directly with Hyprland and hyprpaper through their Unix
//! sockets under `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/`,
//! avoiding any shell command invocation or third-party crate for socket
//! discovery.  Each request opens a short-lived connection: write the
//! command, read the reply to EOF.

use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

/// Errors that can occur when talking to Hyprland or hyprpaper.
#[derive(Debug, thiserror::Error)]
#[error("hyprland IPC error: {0}")]
pub struct IpcError(pub(crate) String);

/// Resolve the directory holding the current instance's sockets.
///
/// Hyprland ≥ 0.40 stores them at
/// `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/`.
fn instance_dir() -> Result<PathBuf, IpcError> {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .map_err(|_| IpcError("XDG_RUNTIME_DIR not set".into()))?;
    let signature = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| IpcError("HYPRLAND_INSTANCE_SIGNATURE not set".into()))?;
    Ok(PathBuf::from(runtime_dir).join("hypr").join(signature))
}

/// Hyprland's command socket (`.socket.sock`).
pub fn command_socket() -> Result<PathBuf, IpcError> {
    Ok(instance_dir()?.join(".socket.sock"))
}

/// hyprpaper's control socket (`.hyprpaper.sock`).
pub fn hyprpaper_socket() -> Result<PathBuf, IpcError> {
    Ok(instance_dir()?.join(".hyprpaper.sock"))
}

/// Send a raw request over `socket` and return the response as a string.
pub fn request(socket: &Path, payload: &str) -> Result<String, IpcError> {
    let mut stream = UnixStream::connect(socket)
        .map_err(|e| IpcError(format!("connect to {}: {}", socket.display(), e)))?;

    stream
        .write_all(payload.as_bytes())
        .map_err(|e| IpcError(format!("write: {}", e)))?;

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .map_err(|e| IpcError(format!("read: {}", e)))?;

    String::from_utf8(response).map_err(|e| IpcError(format!("utf-8: {}", e)))
}

/// Send a JSON data query (`j/<command>`) to Hyprland and return the raw
/// JSON string.
pub fn json_query(data_command: &str) -> Result<String, IpcError> {
    let socket = command_socket()?;
    request(&socket, &format!("j/{}", data_command))
}
