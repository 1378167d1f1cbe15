//! Display-fit resizing.
//!
//! A downloaded wallpaper is rescaled to the bounding box of the active
//! displays — the maximum width and height across all outputs — so hyprpaper
//! never has to scale at paint time.  The resample deliberately stretches to
//! fill the box; no aspect-preserving letterbox.
//!
//! Re-encode rule: JPEG sources stay JPEG (quality 90), PNG and GIF sources
//! become PNG, anything else keeps its extension and is encoded as JPEG.
//! The result is written beside the original with a `-<w>x<h>` suffix.

use crate::traits::DisplayInfo;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};
use log::info;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Errors from decoding, resampling, or re-encoding.
#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The smallest rectangle containing every display: maximum width ×
/// maximum height.  `None` when no display reports a usable resolution.
pub fn bounding_box(displays: &[DisplayInfo]) -> Option<(u32, u32)> {
    let width = displays.iter().map(|d| d.width).max()?;
    let height = displays.iter().map(|d| d.height).max()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

/// Rescale the image at `path` to exactly `width × height`.
///
/// Returns the path of the resized copy, or `path` itself when the image
/// already matches the target.
pub fn fit_to_box(path: &Path, width: u32, height: u32) -> Result<PathBuf, ResizeError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let source_format = reader.format();
    let img = reader.decode()?;

    if img.width() == width && img.height() == height {
        return Ok(path.to_path_buf());
    }

    let resized = img.resize_exact(width, height, FilterType::CatmullRom);
    let (encoding, ext) = output_format(source_format, path);
    let out = sized_sibling(path, width, height, &ext);

    match encoding {
        ImageFormat::Png => resized.save_with_format(&out, ImageFormat::Png)?,
        _ => {
            // JPEG has no alpha channel.
            let file = fs::File::create(&out)?;
            let writer = BufWriter::new(file);
            resized
                .to_rgb8()
                .write_with_encoder(JpegEncoder::new_with_quality(writer, 90))?;
        }
    }

    info!(
        "resized {} to {}x{} at {}",
        path.display(),
        width,
        height,
        out.display()
    );
    Ok(out)
}

/// Pick the output encoding and file extension for a source format.
fn output_format(source: Option<ImageFormat>, path: &Path) -> (ImageFormat, String) {
    match source {
        Some(ImageFormat::Jpeg) => (ImageFormat::Jpeg, "jpg".into()),
        Some(ImageFormat::Png) | Some(ImageFormat::Gif) => (ImageFormat::Png, "png".into()),
        _ => {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("jpg")
                .to_string();
            (ImageFormat::Jpeg, ext)
        }
    }
}

/// `dir/stem-<w>x<h>.<ext>` next to the original.
fn sized_sibling(path: &Path, width: u32, height: u32, ext: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("wallpaper");
    path.with_file_name(format!("{}-{}x{}.{}", stem, width, height, ext))
}
