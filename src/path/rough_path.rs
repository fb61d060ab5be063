use std::cell::OnceCell;

use tracing::warn;

use crate::errors::ParseFailure;
use crate::geometry::Point;

use super::{parse_path, resolve, ResolvedSegment, Segment};

/// A parsed path with end points resolved to absolute coordinates.
///
/// The segment list is fixed at construction; `closed` and `linear_points`
/// are derived from it on first use and cached. The pen `position` and
/// `first` point are independent of parsing, and are available for
/// consumers to track drawing state as they walk the segments.
#[derive(Debug, Clone)]
pub struct RoughPath {
    segments: Vec<ResolvedSegment>,
    position: Point,
    first: Option<Point>,
    closed: OnceCell<bool>,
    linear_points: OnceCell<Vec<Vec<Point>>>,
}

impl RoughPath {
    /// Parse `data`, keeping any partial result if parsing fails part way.
    ///
    /// A diagnostic is logged for malformed input; unrecognized characters
    /// leave the path with no segments.
    pub fn new(data: &str) -> Self {
        let segments = parse_path(data).unwrap_or_else(|failure| {
            warn!("using {} segments from invalid path data", failure.partial.len());
            failure.partial
        });
        Self::from_segments(&segments)
    }

    /// Parse `data`, failing on any malformed input.
    pub fn try_new(data: &str) -> Result<Self, ParseFailure> {
        Ok(Self::from_segments(&parse_path(data)?))
    }

    pub fn from_segments(segments: &[Segment]) -> Self {
        Self {
            segments: resolve(segments),
            position: (0., 0.),
            first: None,
            closed: OnceCell::new(),
            linear_points: OnceCell::new(),
        }
    }

    pub fn segments(&self) -> &[ResolvedSegment] {
        &self.segments
    }

    /// True if any segment is a close-path command.
    pub fn closed(&self) -> bool {
        *self
            .closed
            .get_or_init(|| self.segments.iter().any(|s| s.command.is_close()))
    }

    /// End points grouped into one polyline per subpath.
    ///
    /// A new group starts at every moveto; close-path commands end the
    /// current group without contributing a point.
    pub fn linear_points(&self) -> &[Vec<Point>] {
        self.linear_points.get_or_init(|| {
            let mut groups = Vec::new();
            let mut points = Vec::new();
            for s in &self.segments {
                if s.command.is_move() || s.command.is_close() {
                    if !points.is_empty() {
                        groups.push(std::mem::take(&mut points));
                    }
                    if s.command.is_close() {
                        continue;
                    }
                }
                if let Some(p) = s.point {
                    points.push(p);
                }
            }
            if !points.is_empty() {
                groups.push(points);
            }
            groups
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn x(&self) -> f64 {
        self.position.0
    }

    pub fn set_x(&mut self, x: f64) {
        self.position.0 = x;
    }

    pub fn y(&self) -> f64 {
        self.position.1
    }

    pub fn set_y(&mut self, y: f64) {
        self.position.1 = y;
    }

    pub fn first(&self) -> Option<Point> {
        self.first
    }

    pub fn set_first(&mut self, first: Option<Point>) {
        self.first = first;
    }
}
