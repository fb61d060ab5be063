//! ## roughpath - parse, convert and simplify SVG path data
//!
//! `roughpath` reads the SVG path mini-language (the `d` attribute of a `<path>`
//! element) into segments with absolute end points, and provides two operations
//! on the result:
//!
//! * conversion of elliptical arcs into cubic bezier curves, for consumers
//!   without an arc primitive ([`ArcConverter`], [`arcs_to_cubics`]);
//! * simplification of the path's polylines to fewer points, re-emitted as
//!   path data ([`PathFitter`]).
//!
//! ## Library use
//!
//! [`RoughPath`] is the main entry point. Malformed path data doesn't cause a
//! failure in `RoughPath::new()`; a warning is logged via `tracing` and any
//! segments read before the fault are kept. Use `RoughPath::try_new()` to
//! treat malformed data as an error.
//!
//! The `process_*` functions wrap these for front-ends such as the `roughpath`
//! command-line tool, configured by a [`ProcessConfig`].
//!
//! ## Example
//!
//! ```
//! use roughpath::{PathFitter, RoughPath};
//!
//! let path = RoughPath::new("M0,0 L10,0 L10,10 Z");
//! assert!(path.closed());
//! assert_eq!(path.linear_points(), &[vec![(0., 0.), (10., 0.), (10., 10.)]]);
//!
//! // paths of five points or fewer are too small to simplify
//! assert_eq!(PathFitter::from_path(&path).fit(0.5), "");
//!
//! let path = RoughPath::new("M0 0 L1 5 L2 0 L3 5 L4 0 L5 5 L6 0");
//! let d = PathFitter::from_path(&path).fit(0.5);
//! assert!(d.starts_with("M0,0L"));
//! assert_eq!(d.matches('L').count(), 4);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read, Write};

mod arc;
#[cfg(feature = "cli")]
pub mod cli;
pub mod errors;
mod fitter;
mod geometry;
mod path;
mod process;
mod types;

pub use arc::{arcs_to_cubics, ArcConverter, CubicSegment};
pub use errors::{Error, ParseError, ParseFailure, Result};
pub use fitter::PathFitter;
pub use geometry::{line_length, Point};
pub use path::{
    parse_path, parse_tokens, resolve, tokenize, Command, ResolvedSegment, RoughPath, Segment,
    Token,
};

use process::Processor;

// Allow users of this as a library to easily retrieve the version of roughpath being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The operation performed by `process_*` functions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Operation {
    /// List resolved segments
    #[default]
    Parse,
    /// List end points grouped by subpath
    Points,
    /// Re-emit path data with arcs replaced by cubic beziers
    Arcs,
    /// Re-emit simplified path data, keeping `ratio` of each subpath's points
    Fit { ratio: f64 },
}

/// Output representation for `Parse` and `Points` operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings to configure a single processing run.
///
/// Alternate front-ends may use this directly rather than `cli::Config`,
/// which wraps this struct when `roughpath` is run as a command-line program.
#[derive(Clone, Debug, Default)]
pub struct ProcessConfig {
    /// What to do with the parsed path
    pub operation: Operation,
    /// Output format (default text)
    pub format: OutputFormat,
    /// Fail on malformed path data rather than using partial results
    pub strict: bool,
    /// Override whether fitted output is closed (default: closed if input is)
    pub closed: Option<bool>,
}

/// Reads path data from the `reader` stream, processes it, and writes to `writer`.
///
/// The entire stream is read before any output is written.
pub fn process_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &ProcessConfig,
) -> Result<()> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let output = Processor::new(config).process(&input)?;
    writeln!(writer, "{output}")?;
    Ok(())
}

/// Process `input` provided as a string, returning the result as a string.
pub fn process_str<T: Into<String>>(input: T, config: &ProcessConfig) -> Result<String> {
    let mut input = Cursor::new(input.into());
    let mut output: Vec<u8> = vec![];

    process_stream(&mut input, &mut output, config)?;

    String::from_utf8(output).map_err(Error::from_err)
}

/// Read path data from `input` and write results to `output`.
///
/// Either may be `-` for stdin / stdout respectively.
pub fn process_file(input: &str, output: &str, config: &ProcessConfig) -> Result<()> {
    let mut in_reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };

    if output == "-" {
        process_stream(&mut in_reader, &mut std::io::stdout(), config)?;
    } else {
        let mut out_file = File::create(output)?;
        process_stream(&mut in_reader, &mut out_file, config)?;
    }

    Ok(())
}
