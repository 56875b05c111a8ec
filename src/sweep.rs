// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find a seam by sweeping the seam digraph one row at a time.
//!
//! Since every edge runs from one row to the next, by the time a row
//! is reached every one of its parents is already final.  Each node
//! simply takes the cheapest of its (up to) three parents, and the
//! whole search is a single linear pass with no queue.

use crate::energy::EnergyMap;
use crate::seam::Seam;
use crate::seamfinder::SeamFinder;
use crate::seamgraph::SeamGraph;

/// The dynamic-programming seam engine.  This is the default.
#[derive(Debug, Default, Copy, Clone)]
pub struct RowSweep;

/// Settle every node of the graph, top row first.
pub(crate) fn sweep(graph: &mut SeamGraph) {
    let (width, height) = (graph.width(), graph.height());
    for x in 0..width {
        graph[(x, 0)].processed = true;
    }

    // For every subsequent row, populate the node with the sum of the
    // *lowest adjacent upper energy* and the *x coordinate of that
    // energy*.  Ties go to the leftmost parent.
    for y in 1..height {
        for x in 0..width {
            let (parent_x, parent_cost) = graph
                .predecessors(x, y)
                .map(|pt| (pt.0, graph[pt].cumulative))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .expect("every node below the top row has a parent");
            let node = &mut graph[(x, y)];
            node.cumulative = parent_cost + node.energy;
            node.from = Some(parent_x);
            node.processed = true;
        }
    }
}

impl SeamFinder for RowSweep {
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Seam {
        assert!(
            energy.width() > 0 && energy.height() > 0,
            "cannot find a seam in an empty image"
        );
        let mut graph = SeamGraph::new(energy);
        sweep(&mut graph);
        graph.trace()
    }
}
