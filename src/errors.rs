// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The things that can go wrong between the command line and the
//! output file.  Broken seams are not among them; those are bugs, and
//! they are asserted against where they would occur.

use failure::Fail;

/// Every recoverable failure the carver reports.
#[derive(Debug, Fail)]
pub enum SeamError {
    /// The command line could not be turned into a configuration.
    #[fail(display = "{}", _0)]
    Configuration(#[cause] clap::Error),

    /// The input file was unreadable or could not be decoded.
    #[fail(display = "could not load image '{}'", path)]
    Load {
        path: String,
        #[cause]
        cause: image::ImageError,
    },

    /// The output file could not be encoded or written.
    #[fail(display = "could not save image '{}'", path)]
    Save {
        path: String,
        #[cause]
        cause: image::ImageError,
    },

    /// More seams were requested than the image has columns or rows to
    /// give up.
    #[fail(
        display = "cannot remove {} {} from an image with only {}",
        requested, axis, available
    )]
    TooManySeams {
        axis: &'static str,
        requested: u32,
        available: u32,
    },
}

impl From<clap::Error> for SeamError {
    fn from(error: clap::Error) -> Self {
        SeamError::Configuration(error)
    }
}

pub type Result<T> = std::result::Result<T, SeamError>;
