// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find a seam with a cheapest-first relaxation over the seam digraph.
//!
//! This is Dijkstra's algorithm: all of the top row are sources, the
//! weight of an edge is the energy of the pixel it points at, and the
//! node with the lowest cumulative energy is always settled next.
//! It does more work than the row sweep, but it makes no assumption
//! about the shape of the graph beyond non-negative weights.

use crate::energy::EnergyMap;
use crate::seam::Seam;
use crate::seamfinder::SeamFinder;
use crate::seamgraph::SeamGraph;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The priority-queue seam engine.
#[derive(Debug, Default, Copy, Clone)]
pub struct Dijkstra;

// A node waiting in the queue, with the cost it had when it was
// queued.  The queue is ordered cheapest first, then by row, then by
// column, so that equal costs always come out in the same order.
#[derive(Debug, Copy, Clone)]
struct Candidate {
    cumulative: f64,
    x: u32,
    y: u32,
}

impl Ord for Candidate {
    // BinaryHeap is a max-heap; every comparison here is reversed.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cumulative
            .total_cmp(&self.cumulative)
            .then_with(|| other.y.cmp(&self.y))
            .then_with(|| other.x.cmp(&self.x))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Settle every node of the graph, cheapest first.
pub(crate) fn relax(graph: &mut SeamGraph) {
    let mut queue = BinaryHeap::with_capacity(graph.width() as usize * 2);
    for x in 0..graph.width() {
        queue.push(Candidate {
            cumulative: graph[(x, 0)].cumulative,
            x,
            y: 0,
        });
    }

    while let Some(Candidate { x, y, .. }) = queue.pop() {
        // A node improved after it was queued is queued again; the
        // older, dearer entry is left behind and skipped here.
        if graph[(x, y)].processed {
            continue;
        }
        graph[(x, y)].processed = true;
        let settled = graph[(x, y)].cumulative;

        for (nx, ny) in graph.successors(x, y) {
            let neighbor = &mut graph[(nx, ny)];
            if neighbor.processed {
                continue;
            }
            let cumulative = settled + neighbor.energy;
            if cumulative < neighbor.cumulative {
                neighbor.cumulative = cumulative;
                neighbor.from = Some(x);
                queue.push(Candidate {
                    cumulative,
                    x: nx,
                    y: ny,
                });
            }
        }
    }
}

impl SeamFinder for Dijkstra {
    fn find_vertical_seam(&self, energy: &EnergyMap) -> Seam {
        assert!(
            energy.width() > 0 && energy.height() > 0,
            "cannot find a seam in an empty image"
        );
        let mut graph = SeamGraph::new(energy);
        relax(&mut graph);
        graph.trace()
    }
}
