// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main routine
//!
//! The seam carver owns one image and, once anybody has asked for it,
//! that image's energy map.  Every operation that changes the pixels
//! produces a new carver with no energy map at all, so a map can never
//! outlive the image it was computed from.

use crate::energy::{calculate_energy, EnergyMap};
use crate::errors::{Result, SeamError};
use crate::flipper::transpose;
use crate::seam::Seam;
use crate::seamfinder::SeamFinder;
use crate::sweep::RowSweep;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb};
use log::{debug, info};
use std::cell::OnceCell;

/// Copy every pixel but the seam's into a new image one column
/// narrower.  The pixels left in each row keep their order.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &Seam) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert!(
        width > 0 && seam.fits(width, height),
        "seam {:?} does not fit a {}x{} image",
        seam,
        width,
        height
    );
    let columns = seam.columns();
    ImageBuffer::from_fn(width - 1, height, |x, y| {
        let skip = columns[y as usize];
        image.get_pixel(if x < skip { x } else { x + 1 }, y)
    })
}

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: ImageBuffer<P, Vec<S>>,
    energy: OnceCell<EnergyMap>,
}

impl<P, S> SeamCarver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    Rgb<S>: Pixel<Subpixel = S>,
{
    /// Creates a new SeamCarver with a private copy of an image.
    pub fn new<I>(image: &I) -> Self
    where
        I: GenericImageView<Pixel = P>,
    {
        let (width, height) = image.dimensions();
        Self::from_buffer(ImageBuffer::from_fn(width, height, |x, y| {
            image.get_pixel(x, y)
        }))
    }

    /// Creates a new SeamCarver that takes ownership of an image.
    pub fn from_buffer(image: ImageBuffer<P, Vec<S>>) -> Self {
        SeamCarver {
            image,
            energy: OnceCell::new(),
        }
    }

    pub fn image(&self) -> &ImageBuffer<P, Vec<S>> {
        &self.image
    }

    pub fn into_image(self) -> ImageBuffer<P, Vec<S>> {
        self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// The energy map of the image, computed on first use.
    pub fn energy(&self) -> &EnergyMap {
        self.energy.get_or_init(|| calculate_energy(&self.image))
    }

    /// The same image, reflected across its main diagonal.
    pub fn transpose(&self) -> Self {
        Self::from_buffer(transpose(&self.image))
    }

    /// The cheapest vertical seam according to the default engine.
    pub fn best_seam(&self) -> Seam {
        self.best_seam_with(&RowSweep)
    }

    pub fn best_seam_with<F: SeamFinder>(&self, finder: &F) -> Seam {
        finder.find_vertical_seam(self.energy())
    }

    /// A new carver holding this image minus its cheapest vertical
    /// seam.
    pub fn remove_best_seam(&self) -> Self {
        self.remove_best_seam_with(&RowSweep)
    }

    pub fn remove_best_seam_with<F: SeamFinder>(&self, finder: &F) -> Self {
        let seam = self.best_seam_with(finder);
        Self::from_buffer(remove_vertical_seam(&self.image, &seam))
    }

    /// Given a number of columns and a number of rows to get rid of,
    /// repeatedly carve seams out of the image.
    pub fn reduce(&self, remove_width: u32, remove_height: u32) -> Result<Self> {
        self.reduce_with(&RowSweep, remove_width, remove_height)
    }

    // This is absurdly inefficient, as the entire energy map and
    // energy seam digraph is recalculated for every seam.  It should
    // be possible to find the span of columns affected by the carve
    // and recalculate only those.

    /// As `reduce`, with a chosen seam engine.  Columns go first;
    /// rows are carved as columns of the transposed image.
    pub fn reduce_with<F: SeamFinder>(
        &self,
        finder: &F,
        remove_width: u32,
        remove_height: u32,
    ) -> Result<Self> {
        let (width, height) = self.dimensions();
        if remove_width > 0 && remove_width >= width {
            return Err(SeamError::TooManySeams {
                axis: "columns",
                requested: remove_width,
                available: width,
            });
        }
        if remove_height > 0 && remove_height >= height {
            return Err(SeamError::TooManySeams {
                axis: "rows",
                requested: remove_height,
                available: height,
            });
        }

        info!(
            "carving {}x{} down to {}x{}",
            width,
            height,
            width - remove_width,
            height - remove_height
        );
        let mut scratch = self.clone();
        for n in 0..remove_width {
            scratch = scratch.remove_best_seam_with(finder);
            debug!("W {}: {:?}", n + 1, scratch.dimensions());
        }

        scratch = scratch.transpose();
        for n in 0..remove_height {
            scratch = scratch.remove_best_seam_with(finder);
            debug!("H {}: {:?}", n + 1, scratch.dimensions());
        }
        Ok(scratch.transpose())
    }
}
