// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam digraph
//!
//! Every pixel is a node, and every node has an edge to the (up to)
//! three pixels below it: down-left, down, and down-right.  The
//! edges are never stored; they fall out of the coordinates.  Because
//! edges only ever run from row `y` to row `y + 1`, the graph is a
//! layered DAG and a search never needs to worry about cycles.
//!
//! In lieu of pointers, a node's best-known predecessor is the column
//! of its parent in the row above.

use crate::energy::EnergyMap;
use crate::seam::Seam;
use crate::twodmap::TwoDimensionalMap;
use itertools::Itertools;
use std::ops::{Index, IndexMut, RangeInclusive};

/// One pixel's worth of search state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeamNode {
    /// The pixel's own energy; the weight of every edge into it.
    pub energy: f64,
    /// Cheapest known total from the top row down to and including
    /// this pixel; infinite until something reaches it.
    pub cumulative: f64,
    /// Column of the parent on the cheapest known path.
    pub from: Option<u32>,
    /// Set once the search has settled this node for good.
    pub processed: bool,
}

impl Default for SeamNode {
    fn default() -> Self {
        SeamNode {
            energy: 0.0,
            cumulative: f64::INFINITY,
            from: None,
            processed: false,
        }
    }
}

/// The columns `x - 1 ..= x + 1`, clipped to an image `width` wide.
pub(crate) fn adjacent_columns(x: u32, width: u32) -> RangeInclusive<u32> {
    let maxwidth = width - 1;
    let first = if x == 0 { 0 } else { x - 1 };
    let last = if x >= maxwidth { maxwidth } else { x + 1 };
    first..=last
}

/// The graph for one seam search.  It is built, searched, traced, and
/// thrown away; a carved image needs a new one.
#[derive(Debug, Clone)]
pub struct SeamGraph {
    nodes: TwoDimensionalMap<SeamNode>,
}

impl SeamGraph {
    /// One node per pixel.  The top row are the sources, so they start
    /// out having cost exactly their own energy.
    pub fn new(energy: &EnergyMap) -> Self {
        let (width, height) = (energy.width(), energy.height());
        let mut nodes: TwoDimensionalMap<SeamNode> = TwoDimensionalMap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let node = &mut nodes[(x, y)];
                node.energy = energy[(x, y)];
                if y == 0 {
                    node.cumulative = node.energy;
                }
            }
        }
        SeamGraph { nodes }
    }

    pub fn width(&self) -> u32 {
        self.nodes.width()
    }

    pub fn height(&self) -> u32 {
        self.nodes.height()
    }

    /// The pixels in the row above with an edge into `(x, y)`.  The top
    /// row has none.
    pub fn predecessors(&self, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> {
        let columns = if y == 0 {
            None
        } else {
            Some(adjacent_columns(x, self.width()))
        };
        columns.into_iter().flatten().map(move |px| (px, y - 1))
    }

    /// The pixels in the row below that `(x, y)` has an edge into.  The
    /// bottom row has none.
    pub fn successors(&self, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> {
        let columns = if y + 1 >= self.height() {
            None
        } else {
            Some(adjacent_columns(x, self.width()))
        };
        columns.into_iter().flatten().map(move |sx| (sx, y + 1))
    }

    /// The column of the cheapest node in the bottom row.  Equal
    /// totals go to the leftmost column.
    pub fn cheapest_in_last_row(&self) -> Option<u32> {
        if self.height() == 0 {
            return None;
        }
        self.nodes
            .row(self.height() - 1)
            .iter()
            .position_min_by(|a, b| a.cumulative.total_cmp(&b.cumulative))
            .map(|x| x as u32)
    }

    /// Follow the parent links from the cheapest bottom node back up
    /// to the top row.  Only meaningful once a search has reached
    /// every row.
    pub fn trace(&self) -> Seam {
        let height = self.height();
        let mut seam_col = match self.cheapest_in_last_row() {
            Some(x) => x,
            None => return Seam::new(Vec::new()),
        };
        // Working backwards, generate a vec of x coordinates that map
        // to the seam, reverse and return.
        let mut columns = (0..height)
            .rev()
            .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
                acc.push(seam_col);
                if y > 0 {
                    seam_col = self.nodes[(seam_col, y)]
                        .from
                        .expect("every node below the top row has a parent once searched");
                }
                acc
            });
        columns.reverse();
        let seam = Seam::new(columns);
        debug_assert!(seam.is_connected());
        seam
    }
}

impl Index<(u32, u32)> for SeamGraph {
    type Output = SeamNode;

    fn index(&self, pt: (u32, u32)) -> &SeamNode {
        &self.nodes[pt]
    }
}

impl IndexMut<(u32, u32)> for SeamGraph {
    fn index_mut(&mut self, pt: (u32, u32)) -> &mut SeamNode {
        &mut self.nodes[pt]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> SeamGraph {
        SeamGraph::new(&EnergyMap::from_values(
            3,
            2,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        ))
    }

    #[test]
    fn only_the_top_row_starts_with_a_cost() {
        let graph = graph();
        assert_eq!(graph[(1, 0)].cumulative, 2.0);
        assert_eq!(graph[(1, 1)].energy, 5.0);
        assert!(graph[(1, 1)].cumulative.is_infinite());
        assert!(graph[(1, 1)].from.is_none());
        assert!(!graph[(0, 0)].processed);
    }

    #[test]
    fn edges_connect_adjacent_columns_of_adjacent_rows() {
        let graph = graph();
        assert_eq!(graph.successors(0, 0).collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
        assert_eq!(
            graph.successors(1, 0).collect::<Vec<_>>(),
            vec![(0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(graph.successors(2, 1).count(), 0);
        assert_eq!(graph.predecessors(2, 1).collect::<Vec<_>>(), vec![(1, 0), (2, 0)]);
        assert_eq!(graph.predecessors(0, 0).count(), 0);
    }

    #[test]
    fn single_column_images_have_a_single_edge_per_node() {
        assert_eq!(adjacent_columns(0, 1), 0..=0);
        assert_eq!(adjacent_columns(4, 5), 3..=4);
    }

    #[test]
    fn last_row_ties_go_to_the_leftmost_column() {
        let mut graph = graph();
        for x in 0..3 {
            graph[(x, 1)].cumulative = if x == 0 { 9.0 } else { 7.0 };
            graph[(x, 1)].from = Some(x);
        }
        assert_eq!(graph.cheapest_in_last_row(), Some(1));
        assert_eq!(graph.trace().columns(), &[1, 1]);
    }
}
