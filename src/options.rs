// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command line configuration
//!
//! The carver takes its flags the old-fashioned way, with a single
//! dash: `-in`, `-out`, `-width`, `-height`, plus the diagnostic
//! outputs `-energy`, `-seam` and `-negate`.  Those are rewritten into
//! the double-dash long options clap expects.  Anything else that
//! looks like a flag is reported and thrown away rather than treated
//! as an error.

use crate::errors::Result;
use clap::{value_t, App, Arg};
use log::warn;
use std::path::PathBuf;

const FLAGS: [&str; 7] = ["in", "out", "width", "height", "energy", "seam", "negate"];

/// Everything the command line asks for, gathered in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The image to carve.
    pub input: PathBuf,
    /// Where to write the carved image.
    pub output: PathBuf,
    /// Columns to remove.
    pub width: u32,
    /// Rows to remove.
    pub height: u32,
    /// Optional grayscale rendering of the input's energy.
    pub energy_map: Option<PathBuf>,
    /// Optional copy of the input with its first seam marked.
    pub seam_overlay: Option<PathBuf>,
    /// Optional photographic negative of the input.
    pub negative: Option<PathBuf>,
}

// A token like `-abc`: one dash, then lowercase letters only.
fn looks_like_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c.is_ascii_lowercase())
}

/// Rewrite the known single-dash flags as long options and drop the
/// unknown ones.  Returns the new argument list and the flags that
/// were dropped.
pub fn normalize_flags(args: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut skipped = Vec::new();
    let mut normalized = Vec::with_capacity(args.len());
    let mut args = args.into_iter();
    normalized.extend(args.next());
    for arg in args {
        if !looks_like_flag(&arg) {
            normalized.push(arg);
        } else if FLAGS.contains(&&arg[1..]) {
            normalized.push(format!("-{}", arg));
        } else {
            skipped.push(arg);
        }
    }
    (normalized, skipped)
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image reduction by seam carving")
        .arg(
            Arg::with_name("in")
                .long("in")
                .value_name("PATH")
                .help("The image to carve")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .value_name("PATH")
                .help("Where to write the carved image")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("COLUMNS")
                .help("How many columns to remove")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("ROWS")
                .help("How many rows to remove")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .value_name("PATH")
                .help("Also write the input's energy map as a grayscale image")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seam")
                .long("seam")
                .value_name("PATH")
                .help("Also write the input with its cheapest seam in red")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("negate")
                .long("negate")
                .value_name("PATH")
                .help("Also write the input's colour negative")
                .takes_value(true),
        )
        .arg(Arg::with_name("stray").multiple(true).hidden(true))
}

impl Options {
    /// Build the configuration from a full argument list, program name
    /// first.
    pub fn from_args<I, T>(args: I) -> Result<Options>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let (args, skipped) = normalize_flags(args.into_iter().map(Into::into).collect());
        for flag in &skipped {
            warn!("\"{}\" is not a valid parameter. It will be skipped.", flag);
        }

        let matches = app().get_matches_from_safe(args)?;
        let path = |name| matches.value_of(name).map(PathBuf::from);
        Ok(Options {
            input: path("in").unwrap_or_default(),
            output: path("out").unwrap_or_default(),
            width: value_t!(matches, "width", u32)?,
            height: value_t!(matches, "height", u32)?,
            energy_map: path("energy"),
            seam_overlay: path("seam"),
            negative: path("negate"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SeamError;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn parses_the_four_flags() {
        let options =
            Options::from_args(args("seamcarve -in a.png -out b.png -width 20 -height 10")).unwrap();
        assert_eq!(
            options,
            Options {
                input: PathBuf::from("a.png"),
                output: PathBuf::from("b.png"),
                width: 20,
                height: 10,
                energy_map: None,
                seam_overlay: None,
                negative: None,
            }
        );
    }

    #[test]
    fn flag_order_does_not_matter_and_counts_default_to_zero() {
        let options = Options::from_args(args("seamcarve -out b.png -in a.png")).unwrap();
        assert_eq!(options.input, PathBuf::from("a.png"));
        assert_eq!((options.width, options.height), (0, 0));
    }

    #[test]
    fn diagnostic_outputs_are_optional() {
        let options =
            Options::from_args(args("seamcarve -in a.png -out b.png -energy e.png -seam s.png"))
                .unwrap();
        assert_eq!(options.energy_map, Some(PathBuf::from("e.png")));
        assert_eq!(options.seam_overlay, Some(PathBuf::from("s.png")));
        assert_eq!(options.negative, None);
    }

    #[test]
    fn negate_names_a_third_diagnostic() {
        let (normalized, skipped) = normalize_flags(args("seamcarve -negate n.png"));
        assert!(skipped.is_empty());
        assert_eq!(normalized, args("seamcarve --negate n.png"));

        let options =
            Options::from_args(args("seamcarve -in a.png -negate n.png -out b.png")).unwrap();
        assert_eq!(options.negative, Some(PathBuf::from("n.png")));
        assert_eq!(options.energy_map, None);
    }

    #[test]
    fn unknown_flags_are_skipped() {
        let (normalized, skipped) =
            normalize_flags(args("seamcarve -in a.png -verbose -out b.png -x 3"));
        assert_eq!(skipped, vec!["-verbose", "-x"]);
        assert_eq!(normalized, args("seamcarve --in a.png --out b.png 3"));

        let options =
            Options::from_args(args("seamcarve -in a.png -verbose -out b.png -x 3")).unwrap();
        assert_eq!(options.output, PathBuf::from("b.png"));
    }

    #[test]
    fn values_that_are_not_flags_pass_through() {
        assert!(!looks_like_flag("-"));
        assert!(!looks_like_flag("-3"));
        assert!(!looks_like_flag("--in"));
        assert!(!looks_like_flag("-Width"));
        assert!(looks_like_flag("-width"));
    }

    #[test]
    fn a_flag_without_its_value_is_fatal() {
        match Options::from_args(args("seamcarve -in a.png -out")) {
            Err(SeamError::Configuration(_)) => (),
            other => panic!("expected a configuration error, got {:?}", other),
        }
        assert!(Options::from_args(args("seamcarve -in -out b.png")).is_err());
    }

    #[test]
    fn input_and_output_are_required() {
        assert!(Options::from_args(args("seamcarve -out b.png")).is_err());
        assert!(Options::from_args(args("seamcarve -in a.png")).is_err());
    }

    #[test]
    fn counts_must_be_numbers() {
        assert!(Options::from_args(args("seamcarve -in a -out b -width lots")).is_err());
        assert!(Options::from_args(args("seamcarve -in a -out b -height -3")).is_err());
    }
}
