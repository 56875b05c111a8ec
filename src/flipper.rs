// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! A utility proxy for the ImageRS `GenericImageView` trait that maps
//! the width to the original height, and vice versa, as well as every
//! x to y and vice versa.
//!
//! This is what lets horizontal seams be carved by the vertical seam
//! machinery: flip the image, carve columns, flip it back.

use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// A read-only view of an image reflected across its main diagonal.
pub struct Flipper<'a, I: GenericImageView> {
    pub image: &'a I,
}

impl<'a, I: GenericImageView> Flipper<'a, I> {
    pub fn new(image: &'a I) -> Self {
        Flipper { image }
    }
}

impl<'a, I: GenericImageView> GenericImageView for Flipper<'a, I> {
    type Pixel = I::Pixel;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn width(&self) -> u32 {
        self.image.height()
    }

    fn height(&self) -> u32 {
        self.image.width()
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        let (width, height) = self.dimensions();
        (0, 0, width, height)
    }

    fn get_pixel(&self, x: u32, y: u32) -> I::Pixel {
        self.image.get_pixel(y, x)
    }
}

/// Copy an image into a new buffer with rows and columns exchanged.
/// Transposing twice gives back the original.
pub fn transpose<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let flipped = Flipper::new(image);
    let (width, height) = flipped.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| flipped.get_pixel(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn sample() -> RgbImage {
        RgbImage::from_fn(4, 2, |x, y| Rgb([x as u8, y as u8, (x * 10 + y) as u8]))
    }

    #[test]
    fn flipper_swaps_coordinates() {
        let image = sample();
        let flipped = Flipper::new(&image);
        assert_eq!(flipped.dimensions(), (2, 4));
        assert_eq!(flipped.get_pixel(1, 3), *image.get_pixel(3, 1));
    }

    #[test]
    fn transpose_is_self_inverse() {
        let image = sample();
        let once = transpose(&image);
        assert_eq!(once.dimensions(), (2, 4));
        assert_eq!(once.get_pixel(0, 2), &Rgb([2, 0, 20]));
        assert_eq!(transpose(&once), image);
    }
}
