#[cfg(feature = "json")]
use serde::Serialize;

use crate::geometry::Point;

use super::{Command, Segment};

/// A segment with its absolute end point resolved.
///
/// `point` is `None` only for a close-path segment with no known subpath start.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct ResolvedSegment {
    pub command: Command,
    pub data: Vec<f64>,
    pub point: Option<Point>,
}

impl ResolvedSegment {
    pub fn key(&self) -> char {
        self.command.key()
    }
}

/// Resolve each segment's end point to absolute coordinates.
///
/// The current point starts at the origin; relative commands are offset
/// from it. Close-path segments resolve to the start of the current subpath.
pub fn resolve(segments: &[Segment]) -> Vec<ResolvedSegment> {
    let mut current: Point = (0., 0.);
    let mut first: Option<Point> = None;

    segments
        .iter()
        .map(|s| {
            let (cx, cy) = current;
            let d = s.data();
            let rel = |x: f64, y: f64| (x + cx, y + cy);
            use Command::*;
            let point = match s.command() {
                MoveTo | LineTo | SmoothQuadTo => Some((d[0], d[1])),
                MoveToRel | LineToRel | SmoothQuadToRel => Some(rel(d[0], d[1])),
                HorizontalTo => Some((d[0], cy)),
                HorizontalToRel => Some((d[0] + cx, cy)),
                VerticalTo => Some((cx, d[0])),
                VerticalToRel => Some((cx, d[0] + cy)),
                CubicTo => Some((d[4], d[5])),
                CubicToRel => Some(rel(d[4], d[5])),
                SmoothCubicTo | QuadTo => Some((d[2], d[3])),
                SmoothCubicToRel | QuadToRel => Some(rel(d[2], d[3])),
                ArcTo => Some((d[5], d[6])),
                ArcToRel => Some(rel(d[5], d[6])),
                Close | CloseRel => first,
            };

            if s.command().is_move() {
                first = None;
            }
            if let Some(p) = point {
                current = p;
                if first.is_none() {
                    first = Some(p);
                }
            }
            if s.command().is_close() {
                first = None;
            }

            ResolvedSegment {
                command: s.command(),
                data: s.data().to_vec(),
                point,
            }
        })
        .collect()
}
