use crate::error::{ManipulatorError, Result};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// File types accepted by the loader. The extension decides the output format too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormatKind {
    Bmp,
    Jpg,
    Png,
}

impl ImageFormatKind {
    pub const ALL: [ImageFormatKind; 3] = [Self::Bmp, Self::Jpg, Self::Png];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }
}

impl FromStr for ImageFormatKind {
    type Err = ManipulatorError;

    // Case-sensitive: "PNG" is not accepted.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ManipulatorError::InvalidFileType(s.to_string()))
    }
}

impl fmt::Display for ImageFormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded input image together with the naming information used for its outputs.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub image: RgbImage,
    pub name: String,
    pub format: ImageFormatKind,
}

/// Split a path into its base name and validated extension.
///
/// The extension is everything after the last '.', the base name is the
/// component after the last '/' without that extension. No filesystem
/// access happens here.
pub fn split_file_name(path: &str) -> Result<(String, ImageFormatKind)> {
    let (_, extension) = path
        .rsplit_once('.')
        .ok_or_else(|| ManipulatorError::InvalidFileType(path.to_string()))?;
    let format = extension.parse::<ImageFormatKind>()?;

    let file_name = path.rsplit('/').next().unwrap_or(path);
    let name = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);

    Ok((name.to_string(), format))
}

/// Validate the extension, then decode the file into a 3-channel buffer.
pub fn load_image_file<P: AsRef<Path>>(path: P) -> Result<ImageFile> {
    let path = path.as_ref();
    let (name, format) = split_file_name(&path.to_string_lossy())?;

    let image = image::open(path)
        .map_err(|source| ManipulatorError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    tracing::debug!(
        name = %name,
        format = %format,
        width = image.width(),
        height = image.height(),
        "Image decoded"
    );

    Ok(ImageFile {
        image,
        name,
        format,
    })
}
