// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use env_logger::Env;
use failure::Fail;
use log::info;
use seamcarve::diagnostics::{highlight_seam, intensify, negate};
use seamcarve::{load_image, save_image, Options, SeamCarver, SeamError};
use std::env;
use std::process;

fn run() -> Result<(), SeamError> {
    let options = Options::from_args(env::args()).map_err(|err| match err {
        // --help and --version arrive as "errors" that belong on stdout.
        SeamError::Configuration(ref e) if !e.use_stderr() => e.exit(),
        other => other,
    })?;

    let image = load_image(&options.input)?;
    let carver = SeamCarver::from_buffer(image);

    if let Some(path) = &options.energy_map {
        save_image(&intensify(carver.energy()), path)?;
    }
    if let Some(path) = &options.seam_overlay {
        save_image(&highlight_seam(carver.image(), &carver.best_seam()), path)?;
    }
    if let Some(path) = &options.negative {
        save_image(&negate(carver.image()), path)?;
    }

    let reduced = carver.reduce(options.width, options.height)?;
    save_image(reduced.image(), &options.output)?;
    info!("done");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        let mut message = err.to_string();
        for cause in (&err as &dyn Fail).iter_causes() {
            message.push_str(&format!(": {}", cause));
        }
        eprintln!("{}", message);
        process::exit(1);
    }
}
