//! Near-white pixel classification

use image::{Rgba, RgbaImage};

/// Each of R, G and B must be strictly above this to count as near-white.
pub const NEAR_WHITE_THRESHOLD: u8 = 240;

/// What every near-white pixel becomes.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// True when all three color channels exceed [`NEAR_WHITE_THRESHOLD`].
/// Alpha plays no part in the decision.
pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > NEAR_WHITE_THRESHOLD && g > NEAR_WHITE_THRESHOLD && b > NEAR_WHITE_THRESHOLD
}

/// Rewrite a near-white pixel to [`TRANSPARENT_WHITE`].
///
/// Returns whether the pixel matched. A pixel that doesn't match keeps all
/// four channels, its original alpha included.
pub fn clear_pixel(pixel: &mut Rgba<u8>) -> bool {
    if is_near_white(pixel) {
        *pixel = TRANSPARENT_WHITE;
        true
    } else {
        false
    }
}

/// Apply [`clear_pixel`] to the whole image in raster order.
/// Returns the number of pixels that matched.
pub fn clear_near_white(img: &mut RgbaImage) -> usize {
    img.pixels_mut().map(clear_pixel).filter(|&hit| hit).count()
}
