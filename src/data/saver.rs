use crate::data::ImageFormatKind;
use crate::error::{ManipulatorError, Result};
use image::{EncodableLayout, ImageBuffer, Pixel, PixelWithColorType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the pipeline does when an output cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveErrorPolicy {
    /// Log the failure and carry on
    #[default]
    Log,
    /// Return the failure to the caller
    Fail,
}

/// Build `<dir>/<name>_<suffix>.<ext>`.
pub fn output_path(dir: &Path, name: &str, suffix: &str, format: ImageFormatKind) -> PathBuf {
    dir.join(format!("{}_{}.{}", name, suffix, format))
}

/// Encode the buffer according to the destination extension and write it.
pub fn save_image<P>(path: &Path, image: &ImageBuffer<P, Vec<P::Subpixel>>) -> Result<()>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    image.save(path).map_err(|source| ManipulatorError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Image written"
    );
    Ok(())
}

/// Like [`save_image`], but a failure is only logged. Returns whether the write succeeded.
pub fn save_image_or_log<P>(path: &Path, image: &ImageBuffer<P, Vec<P::Subpixel>>) -> bool
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    match save_image(path, image) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Save failed");
            false
        }
    }
}
