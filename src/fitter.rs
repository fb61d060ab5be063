//! Polyline simplification by repeated removal of the least significant point.

use tracing::debug;

use crate::geometry::{line_length, Point};
use crate::path::RoughPath;
use crate::types::fstr;

/// Subpaths are never reduced below this many points.
const MIN_POINTS: usize = 5;

pub struct PathFitter {
    sets: Vec<Vec<Point>>,
    closed: bool,
}

impl PathFitter {
    pub fn new(sets: Vec<Vec<Point>>, closed: bool) -> Self {
        Self { sets, closed }
    }

    /// Fitter over the linear points of a parsed path.
    pub fn from_path(path: &RoughPath) -> Self {
        Self::new(path.linear_points().to_vec(), path.closed())
    }

    /// Simplify each subpath to `ratio` of its points and return the result
    /// as path data.
    ///
    /// Subpaths of five points or fewer are dropped when the ratio would take
    /// them below five points; otherwise at least five points are kept.
    pub fn fit(&self, ratio: f64) -> String {
        let mut out_sets = Vec::new();
        for set in &self.sets {
            let length = set.len();
            let mut est_length = (ratio * length as f64).floor().max(0.) as usize;
            if est_length < MIN_POINTS {
                if length <= MIN_POINTS {
                    debug!("dropping subpath of {length} points");
                    continue;
                }
                est_length = MIN_POINTS;
            }
            out_sets.push(reduce(set, est_length));
        }

        let mut d = String::new();
        for set in &out_sets {
            for (i, point) in set.iter().enumerate() {
                d.push(if i == 0 { 'M' } else { 'L' });
                d.push_str(&format!("{},{}", fstr(point.0), fstr(point.1)));
            }
            if self.closed {
                d.push_str("z ");
            }
        }
        d
    }
}

/// Area of the triangle `a`, `b`, `c` from its side lengths (Heron's formula).
fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    let ab = line_length(a, b);
    let bc = line_length(b, c);
    let ca = line_length(c, a);
    let s = (ab + bc + ca) / 2.;
    // rounding can push degenerate triangles slightly negative
    (s * (s - ab) * (s - bc) * (s - ca)).max(0.).sqrt()
}

/// Remove interior points until at most `count` remain, always taking the
/// point forming the smallest triangle with its neighbours.
///
/// End points are never removed, so this may stop above `count`.
fn reduce(set: &[Point], count: usize) -> Vec<Point> {
    let mut points = set.to_vec();
    while points.len() > count {
        let min_index = points
            .windows(3)
            .map(|w| triangle_area(w[0], w[1], w[2]))
            .enumerate()
            .fold(None, |min: Option<(usize, f64)>, (i, area)| match min {
                Some((_, min_area)) if area >= min_area => min,
                _ => Some((i + 1, area)),
            });
        match min_index {
            Some((index, _)) => {
                points.remove(index);
            }
            None => break,
        }
    }
    debug!("reduced {} points to {}", set.len(), points.len());
    points
}
