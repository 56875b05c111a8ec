// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::errors::{Result, SeamError};
use image::{GenericImageView, ImageBuffer, ImageFormat, PixelWithColorType};
use log::info;
use std::ops::Deref;
use std::path::Path;

/// Read and decode an image file into 8-bit RGB.
pub fn load_image<Q: AsRef<Path>>(path: Q) -> Result<image::RgbImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|cause| SeamError::Load {
        path: path.display().to_string(),
        cause,
    })?;
    let (width, height) = image.dimensions();
    info!("loaded {} ({}x{})", path.display(), width, height);
    Ok(image.to_rgb8())
}

/// Encode an image into a file.  The format follows the file's
/// extension; anything unrecognised is written as PNG.
pub fn save_image<P, C, Q>(image: &ImageBuffer<P, C>, path: Q) -> Result<()>
where
    P: PixelWithColorType,
    [P::Subpixel]: image::EncodableLayout,
    C: Deref<Target = [P::Subpixel]>,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    image
        .save_with_format(path, format)
        .map_err(|cause| SeamError::Save {
            path: path.display().to_string(),
            cause,
        })?;
    info!("wrote {} as {:?}", path.display(), format);
    Ok(())
}
