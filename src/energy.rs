// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the dual-gradient energy of every pixel:
//! the square root of the summed squared RGB differences between its
//! horizontal neighbours plus those between its vertical neighbours.
//! This is the plain backward energy; forward energy and the entropy
//! variants of [Avidan & Shamir (2007)] are not implemented.

use crate::seam::Seam;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive, Rgb};
use itertools::iproduct;
use num_traits::ToPrimitive;
use std::ops::Index;

/// The energy of every pixel in an image, plus the largest value seen
/// while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyMap {
    map: TwoDimensionalMap<f64>,
    max: f64,
}

impl EnergyMap {
    /// Build a map out of already-known energies, row after row.
    pub fn from_values(width: u32, height: u32, values: Vec<f64>) -> Self {
        assert!(
            values.iter().all(|e| *e >= 0.0),
            "energies are magnitudes and cannot be negative"
        );
        let max = values.iter().cloned().fold(0.0, f64::max);
        EnergyMap {
            map: TwoDimensionalMap::from_vec(width, height, values),
            max,
        }
    }

    pub fn width(&self) -> u32 {
        self.map.width()
    }

    pub fn height(&self) -> u32 {
        self.map.height()
    }

    /// The highest energy in the map; zero for a featureless image.
    pub fn max_energy(&self) -> f64 {
        self.max
    }

    pub fn values(&self) -> &[f64] {
        self.map.values()
    }

    /// The same map seen from the side, so that a horizontal seam can
    /// be searched for as if it were a vertical one.
    pub fn transpose(&self) -> Self {
        EnergyMap {
            map: self.map.transpose(),
            max: self.max,
        }
    }

    /// The total energy of the pixels along a vertical seam.
    pub fn of_seam(&self, seam: &Seam) -> f64 {
        seam.pixels().map(|pt| self[pt]).sum()
    }
}

impl Index<(u32, u32)> for EnergyMap {
    type Output = f64;

    fn index(&self, pt: (u32, u32)) -> &f64 {
        &self.map[pt]
    }
}

/// The pair of indices whose difference measures the gradient at
/// `index` along a dimension `len` pixels long.  Rather than reaching
/// past the border, the centre of the measurement is pulled one pixel
/// inward, so column 0 and column 1 both compare columns 0 and 2.
/// Dimensions too short for that compare their two ends.
pub(crate) fn gradient_span(index: u32, len: u32) -> (u32, u32) {
    if len < 3 {
        return (0, len.saturating_sub(1));
    }
    let centre = index.max(1).min(len - 2);
    (centre - 1, centre + 1)
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = √(|Δx|²+|Δy|²)
//
#[inline]
fn energy_of_pair<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    Rgb<S>: Pixel<Subpixel = S>,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.channels()
        .iter()
        .zip(c2.channels())
        .map(|(a, b)| {
            let (a, b) = (ToPrimitive::to_f64(a), ToPrimitive::to_f64(b));
            let delta = a.unwrap_or(0.0) - b.unwrap_or(0.0);
            delta * delta
        })
        .sum()
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  This is generic on
/// the image type; anything that can be viewed as RGB has an energy.
pub fn calculate_energy<I, P, S>(image: &I) -> EnergyMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    Rgb<S>: Pixel<Subpixel = S>,
{
    let (width, height) = image.dimensions();
    let values: Vec<f64> = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let (left, right) = gradient_span(x, width);
            let (up, down) = gradient_span(y, height);
            let dx = energy_of_pair(&image.get_pixel(left, y), &image.get_pixel(right, y));
            let dy = energy_of_pair(&image.get_pixel(x, up), &image.get_pixel(x, down));
            (dx + dy).sqrt()
        })
        .collect();
    EnergyMap::from_values(width, height, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::{ImageBuffer, Luma, RgbImage};

    #[test]
    fn spans_stay_inside_the_image() {
        assert_eq!(gradient_span(0, 5), (0, 2));
        assert_eq!(gradient_span(1, 5), (0, 2));
        assert_eq!(gradient_span(2, 5), (1, 3));
        assert_eq!(gradient_span(3, 5), (2, 4));
        assert_eq!(gradient_span(4, 5), (2, 4));
        assert_eq!(gradient_span(0, 2), (0, 1));
        assert_eq!(gradient_span(1, 2), (0, 1));
        assert_eq!(gradient_span(0, 1), (0, 0));
    }

    #[test]
    fn uniform_image_has_no_energy() {
        let buf = RgbImage::from_pixel(3, 3, Rgb([120, 33, 200]));
        let energy = calculate_energy(&buf);
        assert!(energy.values().iter().all(|e| *e == 0.0));
        assert_eq!(energy.max_energy(), 0.0);
    }

    #[test]
    fn linear_ramp_has_flat_energy() {
        #[rustfmt::skip]
        let data = [0, 10, 20,
                    30, 40, 50,
                    60, 70, 80u8];
        let buf = RgbImage::from_fn(3, 3, |x, y| {
            let v = data[(y * 3 + x) as usize];
            Rgb([v, v, v])
        });
        let energy = calculate_energy(&buf);
        // Every pixel compares column 0 with column 2 and row 0 with row 2.
        let expected = (3.0f64 * 20.0 * 20.0 + 3.0 * 60.0 * 60.0).sqrt();
        for e in energy.values() {
            assert_relative_eq!(*e, expected);
        }
    }

    #[test]
    fn borders_and_corners_are_shifted_inward() {
        // Red grows quadratically across, green linearly down.
        let buf = RgbImage::from_fn(4, 4, |x, y| Rgb([(x * x * 10) as u8, (y * 10) as u8, 0]));
        let energy = calculate_energy(&buf);
        assert_relative_eq!(energy[(0, 0)], 2000f64.sqrt());
        assert_relative_eq!(energy[(1, 2)], 2000f64.sqrt());
        assert_relative_eq!(energy[(2, 1)], 6800f64.sqrt());
        assert_relative_eq!(energy[(3, 3)], 6800f64.sqrt());
        assert_relative_eq!(energy.max_energy(), 6800f64.sqrt());
    }

    #[test]
    fn grayscale_images_count_every_channel() {
        let buf: ImageBuffer<Luma<u8>, _> =
            ImageBuffer::from_raw(3, 1, vec![0u8, 100, 4]).unwrap();
        let energy = calculate_energy(&buf);
        // Luma is lifted to three equal channels: 3 * 4².
        assert_relative_eq!(energy[(1, 0)], 48f64.sqrt());
    }

    #[test]
    fn sixteen_bit_channels_keep_their_range() {
        let buf: ImageBuffer<Rgb<u16>, _> =
            ImageBuffer::from_fn(3, 1, |x, _| Rgb([(x * 1000) as u16, 0, 0]));
        let energy = calculate_energy(&buf);
        assert_relative_eq!(energy[(1, 0)], 2000.0);
    }

    #[test]
    fn degenerate_images_do_not_read_out_of_bounds() {
        let column = RgbImage::from_fn(1, 4, |_, y| Rgb([(y * 50) as u8, 0, 0]));
        let energy = calculate_energy(&column);
        assert_eq!((energy.width(), energy.height()), (1, 4));
        assert!(energy.values().iter().all(|e| *e >= 0.0));

        let pair = RgbImage::from_fn(2, 1, |x, _| Rgb([(x * 3) as u8, 0, 0]));
        let energy = calculate_energy(&pair);
        assert_relative_eq!(energy[(0, 0)], 3.0);
        assert_relative_eq!(energy[(1, 0)], 3.0);
    }

    #[test]
    fn seam_energy_is_the_sum_along_the_path() {
        let energy = EnergyMap::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(energy.of_seam(&Seam::new(vec![1, 0])), 5.0);
        let flipped = energy.transpose();
        assert_eq!(flipped[(1, 0)], 3.0);
        assert_eq!(flipped.max_energy(), 4.0);
    }
}
