use image::{GrayImage, Luma, Rgb, RgbImage};

// BT.601 luma weights (0.299, 0.587, 0.114) scaled by 2^14; they sum to exactly 1 << 14.
const SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const ROUND: u32 = 1 << (SHIFT - 1);

/// Luma of a single RGB sample, rounded half up.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT + ROUND) >> SHIFT) as u8
}

/// Convert a 3-channel colour buffer to a single-channel luminance buffer.
pub fn make_grayscale(image: &RgbImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut gray = GrayImage::new(width, height);

    for (src, dst) in image.pixels().zip(gray.pixels_mut()) {
        let Rgb([r, g, b]) = *src;
        *dst = Luma([luma(r, g, b)]);
    }

    gray
}
