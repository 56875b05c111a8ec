// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image reduction by seam carving.
//!
//! Repeatedly find the connected top-to-bottom path of pixels with
//! the least total energy and cut it out, so that an image narrows
//! (or, carved sideways, shortens) around what is in it rather than
//! being cropped or squashed.

pub mod errors;
pub use errors::SeamError;

pub mod twodmap;

pub mod energy;
pub use energy::{calculate_energy, EnergyMap};

pub mod seam;
pub use seam::Seam;

pub mod seamgraph;
pub use seamgraph::{SeamGraph, SeamNode};

pub mod seamfinder;
pub use seamfinder::SeamFinder;

pub mod dijkstra;
pub use dijkstra::Dijkstra;

pub mod sweep;
pub use sweep::RowSweep;

pub mod flipper;
pub use flipper::{transpose, Flipper};

pub mod seamcarver;
pub use seamcarver::{remove_vertical_seam, SeamCarver};

pub mod diagnostics;

pub mod imagefile;
pub use imagefile::{load_image, save_image};

pub mod options;
pub use options::Options;
