// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A top-to-bottom path through an image: the x coordinate of one
/// pixel in each row, so that `columns()[y]` is the pixel to remove
/// from row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    pub fn new(columns: Vec<u32>) -> Self {
        Seam(columns)
    }

    pub fn columns(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `(x, y)` address of every pixel on the seam, top first.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().enumerate().map(|(y, x)| (*x, y as u32))
    }

    /// True when no step from one row to the next moves more than one
    /// column sideways.
    pub fn is_connected(&self) -> bool {
        self.0.windows(2).all(|w| w[0].max(w[1]) - w[0].min(w[1]) <= 1)
    }

    /// True when the seam has exactly one in-bounds pixel for every
    /// row of a `width` x `height` image.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.len() == height as usize && self.0.iter().all(|x| *x < width)
    }
}

impl From<Vec<u32>> for Seam {
    fn from(columns: Vec<u32>) -> Self {
        Seam(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_seams_move_at_most_one_column() {
        assert!(Seam::new(vec![2, 3, 4, 3]).is_connected());
        assert!(Seam::new(vec![0]).is_connected());
        assert!(!Seam::new(vec![0, 2]).is_connected());
        assert!(!Seam::new(vec![4, 3, 1]).is_connected());
    }

    #[test]
    fn fitting_requires_one_pixel_per_row() {
        let seam = Seam::from(vec![0, 1, 2]);
        assert!(seam.fits(3, 3));
        assert!(!seam.fits(2, 3));
        assert!(!seam.fits(3, 4));
    }

    #[test]
    fn length_counts_rows() {
        let seam = Seam::new(vec![1, 1, 2]);
        assert_eq!(seam.len(), 3);
        assert!(!seam.is_empty());
        assert!(Seam::new(Vec::new()).is_empty());
    }

    #[test]
    fn pixels_carry_their_row() {
        let seam = Seam::new(vec![5, 4]);
        assert_eq!(seam.pixels().collect::<Vec<_>>(), vec![(5, 0), (4, 1)]);
    }
}
