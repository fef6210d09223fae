//! Color magnitude helpers used by the seam weight function
//!
//! Colors are compared by the Euclidean length of their RGB vector. Alpha is
//! ignored throughout; produced tiles are opaque.

use image::Rgba;

/// Euclidean length of the RGB part of a color
pub fn norm(color: Rgba<u8>) -> f64 {
    let [r, g, b, _] = color.0;
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    b.mul_add(b, r.mul_add(r, g * g)).sqrt()
}

/// Absolute difference between the RGB lengths of two colors
///
/// Zero whenever both colors are equally bright, which is where a seam
/// between the two textures is least visible.
pub fn norm_difference(a: Rgba<u8>, b: Rgba<u8>) -> f64 {
    (norm(a) - norm(b)).abs()
}

/// Same color with full opacity
pub const fn opaque(color: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = color.0;
    Rgba([r, g, b, u8::MAX])
}

/// Channel-wise integer mean of the RGB parts, opaque
///
/// Returns `None` for an empty input.
pub fn mean_color(colors: &[Rgba<u8>]) -> Option<Rgba<u8>> {
    if colors.is_empty() {
        return None;
    }

    let mut sums = [0_u32; 3];
    for color in colors {
        for (sum, &channel) in sums.iter_mut().zip(color.0.iter()) {
            *sum += u32::from(channel);
        }
    }

    let count = colors.len() as u32;
    let [r, g, b] = sums.map(|sum| (sum / count) as u8);
    Some(Rgba([r, g, b, u8::MAX]))
}
