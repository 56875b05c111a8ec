// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A row-major, two-dimensional field addressable by `(x, y)`.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field containing one of several
/// possible objects during processing: an `f64` for the energy map,
/// or a node with its cumulative energy and parent address for the
/// seam digraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    values: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map where every cell holds the default value of
    /// its content type.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            values: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector of values.
    pub fn from_vec(width: u32, height: u32, values: Vec<P>) -> Self {
        assert_eq!(
            values.len(),
            width as usize * height as usize,
            "map of {}x{} given {} values",
            width,
            height,
            values.len()
        );
        TwoDimensionalMap {
            width,
            height,
            values,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All values, row after row.
    pub fn values(&self) -> &[P] {
        &self.values
    }

    /// A single row as a contiguous slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = y as usize * self.width as usize;
        &self.values[start..start + self.width as usize]
    }

    /// A new map in which every `(x, y)` has moved to `(y, x)`.
    pub fn transpose(&self) -> Self {
        let mut flipped = TwoDimensionalMap::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                flipped[(y, x)] = self[(x, y)];
            }
        }
        flipped
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.values[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.values[index]
    }
}
