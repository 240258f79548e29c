use crate::error::{ManipulatorError, Result};
use image::imageops::{self, FilterType};
use image::{GenericImageView, ImageBuffer, Pixel};
use serde::{Deserialize, Serialize};

/// Height used when no explicit thumbnail size is requested.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 128;

/// Requested thumbnail size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailSize {
    /// Height fixed at [`DEFAULT_THUMBNAIL_HEIGHT`], width follows the aspect ratio
    #[default]
    Auto,
    /// Exact output size, aspect ratio ignored
    Explicit { width: u32, height: u32 },
}

impl ThumbnailSize {
    /// Both absent means `Auto`, both present means `Explicit`; anything else is rejected.
    pub fn from_options(width: Option<u32>, height: Option<u32>) -> Result<Self> {
        match (width, height) {
            (None, None) => Ok(Self::Auto),
            (Some(width), Some(height)) => Ok(Self::Explicit { width, height }),
            _ => Err(ManipulatorError::PartialThumbnailSize { width, height }),
        }
    }

    /// Output `(width, height)` for a source of the given `(width, height)`.
    pub fn target_dimensions(&self, (src_width, src_height): (u32, u32)) -> Result<(u32, u32)> {
        let (width, height) = match *self {
            Self::Auto => {
                if src_height == 0 {
                    return Err(ManipulatorError::InvalidDimensions {
                        width: src_width,
                        height: src_height,
                    });
                }
                let scale = DEFAULT_THUMBNAIL_HEIGHT as f64 / src_height as f64;
                let width = (src_width as f64 * scale).round();
                if width > u32::MAX as f64 {
                    return Err(ManipulatorError::InvalidDimensions {
                        width: src_width,
                        height: src_height,
                    });
                }
                (width as u32, DEFAULT_THUMBNAIL_HEIGHT)
            }
            Self::Explicit { width, height } => (width, height),
        };

        if width == 0 || height == 0 {
            return Err(ManipulatorError::InvalidDimensions { width, height });
        }
        Ok((width, height))
    }
}

/// Interpolation used for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    #[default]
    Linear,
    Cubic,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Linear => FilterType::Triangle,
            ResizeFilter::Cubic => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

pub type Thumbnail<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Resample `image` to the requested size with linear interpolation.
pub fn make_thumbnail<I>(image: &I, size: ThumbnailSize) -> Result<Thumbnail<I::Pixel>>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    make_thumbnail_with_filter(image, size, ResizeFilter::default())
}

pub fn make_thumbnail_with_filter<I>(
    image: &I,
    size: ThumbnailSize,
    filter: ResizeFilter,
) -> Result<Thumbnail<I::Pixel>>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    let (width, height) = size.target_dimensions(image.dimensions())?;
    tracing::debug!(
        src_width = image.width(),
        src_height = image.height(),
        width,
        height,
        ?filter,
        "Resizing"
    );
    Ok(imageops::resize(image, width, height, filter.into()))
}
