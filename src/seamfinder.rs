// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::energy::EnergyMap;
use crate::seam::Seam;

/// This trait defines how we will get seams out of an energy map.  It's
/// a primitive interface, just enough to make room for more than one
/// search strategy.
///
/// Implementations must be deterministic: of several equally cheap
/// seams, the one returned is the one whose bottom pixel is leftmost,
/// and each of its pixels follows the leftmost of the equally cheap
/// parents above it.
pub trait SeamFinder {
    /// Find the cheapest top-to-bottom seam.  The map must have at
    /// least one row and one column.
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Seam;

    /// Find the cheapest left-to-right seam.  The result lists the y
    /// coordinate of the seam for each column.
    fn find_horizontal_seam(&self, energy: &EnergyMap) -> Seam {
        self.find_vertical_seam(&energy.transpose())
    }
}
