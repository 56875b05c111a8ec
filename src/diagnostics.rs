// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of what the carver sees.  None of these take part in
//! carving; they exist to look at.

use crate::energy::EnergyMap;
use crate::seam::Seam;
use image::{GrayImage, Luma, Pixel, Rgb, RgbImage};

/// The photographic negative of an image.
pub fn negate(image: &RgbImage) -> RgbImage {
    let mut out = image.clone();
    out.pixels_mut().for_each(|p| p.invert());
    out
}

/// Render an energy map as a grayscale image, with the most energetic
/// pixel at full white.  A map with no energy at all renders black.
pub fn intensify(energy: &EnergyMap) -> GrayImage {
    let factor = energy.max_energy();
    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        if factor > 0.0 {
            Luma([(255.0 * energy[(x, y)] / factor) as u8])
        } else {
            Luma([0])
        }
    })
}

/// A copy of the image with a vertical seam painted in red.
pub fn highlight_seam(image: &RgbImage, seam: &Seam) -> RgbImage {
    let mut out = image.clone();
    for (x, y) in seam.pixels() {
        out.put_pixel(x, y, Rgb([255, 0, 0]));
    }
    out
}
