//! The wallpaper changer orchestrator.
//!
//! [`WallpaperChanger`] ties the retention pruner, topic resolver, Wallhaven
//! client, and resizer together and talks to the desktop only through the
//! [`DisplayEnumerator`] / [`WallpaperApplier`] / [`Notifier`] seams, so the
//! whole apply pipeline runs in tests against in-memory doubles.
//!
//! Error policy follows the run contract: everything up to and including the
//! download is fatal and aborts the run; everything after it (resize, state
//! file, per-display apply calls, notification) degrades with a logged
//! warning.

use crate::config::WallpaperConfig;
use crate::resize;
use crate::retention;
use crate::topic;
use crate::traits::{DisplayEnumerator, DisplayInfo, Notifier, Urgency, WallpaperApplier};
use crate::wallhaven::{self, FetchError, WallhavenClient};
use log::{info, warn};
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};

/// Fatal errors for a fetch-and-apply run.
#[derive(Debug, thiserror::Error)]
pub enum ChangerError {
    /// The user's home directory cannot be resolved.
    #[error("cannot resolve home directory")]
    NoHome,

    /// The wallpaper directory cannot be created.
    #[error("cannot create wallpaper directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Search or download failed (includes the empty-result case).
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Orchestrates the select → fetch → resize → apply pipeline.
///
/// Generic over the collaborator traits, making it independent of Hyprland,
/// hyprpaper, or any notification daemon.
///
/// # Typical usage
///
/// ```ignore
/// let changer = WallpaperChanger::new(
///     HyprlandDisplays::new(),
///     Hyprpaper::new(),
///     DesktopNotifier::new("hyprkit-wallpaper", "hyprpaper"),
/// );
/// changer.fetch_and_apply(&WallpaperConfig::load_or_default())?;
/// ```
pub struct WallpaperChanger<D, A, N> {
    displays: D,
    applier: A,
    notifier: N,
    client: WallhavenClient,
    state_file: Option<PathBuf>,
}

impl<D, A, N> WallpaperChanger<D, A, N>
where
    D: DisplayEnumerator,
    A: WallpaperApplier,
    N: Notifier,
{
    /// Create a new changer.  The state file defaults to `~/.wallpaper`.
    pub fn new(displays: D, applier: A, notifier: N) -> Self {
        Self {
            displays,
            applier,
            notifier,
            client: WallhavenClient::new(),
            state_file: dirs::home_dir().map(|home| home.join(".wallpaper")),
        }
    }

    /// Override where the most recently applied path is recorded.
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_file = Some(path.into());
        self
    }

    /// Full flow: prune the pool, pick a topic, search, download, apply.
    pub fn fetch_and_apply(&self, config: &WallpaperConfig) -> Result<(), ChangerError> {
        if dirs::home_dir().is_none() {
            return Err(ChangerError::NoHome);
        }

        let dir = config.wallpaper_dir();
        std::fs::create_dir_all(&dir).map_err(|source| ChangerError::Directory {
            path: dir.clone(),
            source,
        })?;

        let removed = retention::prune(&dir, config.keep);
        if removed > 0 {
            info!("pruned {} old wallpaper(s)", removed);
        }

        let mut rng = rand::rng();
        let raw = config
            .topics
            .choose(&mut rng)
            .map(String::as_str)
            .unwrap_or("lofi");
        let resolved = topic::resolve(raw);
        info!("searching for wallpapers related to: {}", resolved.label);

        let hits = self.client.search(&resolved.query)?;
        let hit = hits.choose(&mut rng).ok_or_else(|| FetchError::NoResults {
            query: resolved.query.clone(),
        })?;

        let dest = dir.join(wallhaven::local_filename(&resolved.label, &hit.url));
        self.client.download(&hit.url, &dest)?;

        self.apply(&dest, Some(&resolved.label));
        Ok(())
    }

    /// Resize, record, and fan a wallpaper out to the compositor.
    ///
    /// Best-effort throughout: a failed resize falls back to the original
    /// file, a failed apply call on one display does not stop the others.
    pub fn apply(&self, wallpaper: &Path, label: Option<&str>) {
        let displays = match self.displays.displays() {
            Ok(displays) => displays,
            Err(e) => {
                warn!("cannot enumerate displays: {}", e);
                Vec::new()
            }
        };

        let current = self.ensure_sized(wallpaper, &displays);
        self.record_current(&current);

        if let Err(e) = self.applier.preload(&current) {
            warn!("preload failed: {}", e);
        }
        if displays.is_empty() {
            if let Err(e) = self.applier.apply(None, &current) {
                warn!("global apply failed: {}", e);
            }
        } else {
            for display in &displays {
                if let Err(e) = self.applier.apply(Some(&display.name), &current) {
                    warn!("apply on {} failed: {}", display.name, e);
                }
            }
        }
        if let Err(e) = self.applier.reload() {
            warn!("reload failed: {}", e);
        }

        let file_name = current
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| current.display().to_string());
        let mut message = format!("Wallpaper changed to {}", file_name);
        if let Some(label) = label {
            message.push_str(&format!(" ({})", label));
        }
        if let Err(e) = self.notifier.notify(&message, Urgency::Normal, Some(&current)) {
            warn!("notification failed: {}", e);
        }
    }

    /// Rescale to the display bounding box, falling back to the original on
    /// any failure or when no display is enumerable.
    fn ensure_sized(&self, wallpaper: &Path, displays: &[DisplayInfo]) -> PathBuf {
        let Some((width, height)) = resize::bounding_box(displays) else {
            return wallpaper.to_path_buf();
        };
        match resize::fit_to_box(wallpaper, width, height) {
            Ok(path) => path,
            Err(e) => {
                warn!("resize failed, using original: {}", e);
                wallpaper.to_path_buf()
            }
        }
    }

    /// Persist the applied wallpaper's path to the state file.
    fn record_current(&self, path: &Path) {
        let Some(state_file) = &self.state_file else {
            warn!("no home directory, not recording wallpaper path");
            return;
        };
        if let Err(e) = std::fs::write(state_file, path.to_string_lossy().as_bytes()) {
            warn!("cannot record wallpaper path: {}", e);
        }
    }
}
