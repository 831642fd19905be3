//! Aerofoil coordinate file reading.
//!
//! Coordinate files carry one `x y` pair of normalized profile coordinates
//! per line, whitespace-separated, ordered from the trailing edge over the
//! upper surface to the leading edge and back. Lines containing only
//! whitespace are skipped; every other line must parse as exactly two
//! floats.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{HexfoilError, Result};
use crate::math::{Point2, Point3};
use crate::section::Section;

/// Reads a profile from `reader` and places it at `position` with `scale`.
///
/// Profile points are transformed as in [`Section::from_profile`]: scaled,
/// shifted in x/y and placed at the span coordinate `position.z`.
///
/// # Errors
///
/// Returns an I/O error if reading fails, a parse error naming the first
/// malformed line, or a section error if fewer than four points remain.
pub fn read<R: BufRead>(reader: R, position: Point3, scale: f64) -> Result<Section> {
    let mut profile: Vec<Point2> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let pair = parse_pair(&line).map_err(|message| HexfoilError::Parse {
            line: index + 1,
            message,
        })?;
        profile.push(pair);
    }
    Section::from_profile(&profile, position, scale)
}

/// Loads an aerofoil coordinate file from `path`.
///
/// # Errors
///
/// As for [`read`], plus any error opening the file.
pub fn load<P: AsRef<Path>>(path: P, position: Point3, scale: f64) -> Result<Section> {
    let file = File::open(path)?;
    read(BufReader::new(file), position, scale)
}

/// Parses one `x y` coordinate line.
fn parse_pair(line: &str) -> std::result::Result<Point2, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(format!("expected two columns, found {}", fields.len()));
    }
    let x = fields[0]
        .parse::<f64>()
        .map_err(|e| format!("bad x coordinate {:?}: {e}", fields[0]))?;
    let y = fields[1]
        .parse::<f64>()
        .map_err(|e| format!("bad y coordinate {:?}: {e}", fields[1]))?;
    Ok(Point2::new(x, y))
}
