//! Elliptical arc to cubic bezier conversion.
//!
//! Follows the endpoint to center parameterization from
//! <https://www.w3.org/TR/SVG2/implnote.html#ArcConversionEndpointToCenter>,
//! splitting the arc into pieces of at most 90 degrees.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

#[cfg(feature = "json")]
use serde::Serialize;

use crate::geometry::Point;
use crate::path::{Command, RoughPath, Segment};

/// One cubic bezier piece of an arc, starting at the end of the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct CubicSegment {
    pub cp1: Point,
    pub cp2: Point,
    pub to: Point,
}

/// Lazily produces the cubic segments approximating an elliptical arc.
///
/// The sequence is finite (at most four segments) and can't be restarted.
#[derive(Debug, Clone)]
pub struct ArcConverter {
    from: Point,
    // used in place of the ellipse when either radius is zero
    line_to: Option<Point>,
    rx: f64,
    ry: f64,
    sin_phi: f64,
    cos_phi: f64,
    center: Point,
    theta: f64,
    delta: f64,
    t: f64,
    seg_index: usize,
    num_segs: usize,
}

impl ArcConverter {
    pub fn new(
        from: Point,
        to: Point,
        radii: Point,
        x_axis_rotation: f64,
        large_arc_flag: bool,
        sweep_flag: bool,
    ) -> Self {
        let mut conv = Self {
            from,
            line_to: None,
            rx: 0.,
            ry: 0.,
            sin_phi: 0.,
            cos_phi: 1.,
            center: (0., 0.),
            theta: 0.,
            delta: 0.,
            t: 0.,
            seg_index: 0,
            num_segs: 0,
        };
        if from == to {
            return conv;
        }

        let (mut rx, mut ry) = (radii.0.abs(), radii.1.abs());
        if rx == 0. || ry == 0. {
            // https://www.w3.org/TR/SVG2/implnote.html#ArcOutOfRangeParameters
            // "If rx = 0 or ry = 0, then treat this as a straight line segment"
            conv.line_to = Some(to);
            conv.num_segs = 1;
            return conv;
        }

        let phi = x_axis_rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Step 1: Compute (x1', y1')
        let x1_prime = cos_phi * (from.0 - to.0) / 2.0 + sin_phi * (from.1 - to.1) / 2.0;
        let y1_prime = -sin_phi * (from.0 - to.0) / 2.0 + cos_phi * (from.1 - to.1) / 2.0;

        // Step 2: Compute (cx', cy'), scaling radii up if they can't span the endpoints
        let numerator =
            rx * rx * ry * ry - rx * rx * y1_prime * y1_prime - ry * ry * x1_prime * x1_prime;
        let root = if numerator < 0. {
            let s = (1. - numerator / (rx * rx * ry * ry)).sqrt();
            rx *= s;
            ry *= s;
            0.
        } else {
            let sign = if large_arc_flag == sweep_flag { -1. } else { 1. };
            sign * (numerator / (rx * rx * y1_prime * y1_prime + ry * ry * x1_prime * x1_prime))
                .sqrt()
        };
        let cx_prime = root * rx * y1_prime / ry;
        let cy_prime = -root * ry * x1_prime / rx;

        // Step 3: Compute (cx, cy) from (cx', cy')
        let center = (
            cos_phi * cx_prime - sin_phi * cy_prime + (from.0 + to.0) / 2.0,
            sin_phi * cx_prime + cos_phi * cy_prime + (from.1 + to.1) / 2.0,
        );

        // Step 4: Compute theta1 and delta_theta
        let theta = vector_angle(
            1.,
            0.,
            (x1_prime - cx_prime) / rx,
            (y1_prime - cy_prime) / ry,
        );
        let mut dtheta = vector_angle(
            (x1_prime - cx_prime) / rx,
            (y1_prime - cy_prime) / ry,
            (-x1_prime - cx_prime) / rx,
            (-y1_prime - cy_prime) / ry,
        );
        if !sweep_flag && dtheta > 0. {
            dtheta -= 2. * PI;
        } else if sweep_flag && dtheta < 0. {
            dtheta += 2. * PI;
        }

        let num_segs = (dtheta / FRAC_PI_2).abs().ceil() as usize;
        let delta = dtheta / num_segs as f64;
        // Control point distance for a circular arc of `delta` radians
        let t = (8. / 3.) * (delta / 4.).sin().powi(2) / (delta / 2.).sin();

        debug!(
            "arc ({}, {}) -> ({}, {}): {num_segs} segments over {dtheta} radians",
            from.0, from.1, to.0, to.1
        );

        conv.rx = rx;
        conv.ry = ry;
        conv.sin_phi = sin_phi;
        conv.cos_phi = cos_phi;
        conv.center = center;
        conv.theta = theta;
        conv.delta = delta;
        conv.t = t;
        conv.num_segs = num_segs;
        conv
    }

    /// Return the next cubic segment, or `None` once the arc is complete.
    pub fn next_segment(&mut self) -> Option<CubicSegment> {
        if self.seg_index == self.num_segs {
            return None;
        }
        self.seg_index += 1;

        if let Some(to) = self.line_to {
            return Some(CubicSegment {
                cp1: self.from,
                cp2: to,
                to,
            });
        }

        let (sin_theta1, cos_theta1) = self.theta.sin_cos();
        let theta2 = self.theta + self.delta;
        let (sin_theta2, cos_theta2) = theta2.sin_cos();
        let (cos_phi, sin_phi) = (self.cos_phi, self.sin_phi);
        let (rx, ry, t) = (self.rx, self.ry, self.t);

        let to = (
            cos_phi * rx * cos_theta2 - sin_phi * ry * sin_theta2 + self.center.0,
            sin_phi * rx * cos_theta2 + cos_phi * ry * sin_theta2 + self.center.1,
        );
        let cp1 = (
            self.from.0 + t * (-cos_phi * rx * sin_theta1 - sin_phi * ry * cos_theta1),
            self.from.1 + t * (-sin_phi * rx * sin_theta1 + cos_phi * ry * cos_theta1),
        );
        let cp2 = (
            to.0 + t * (cos_phi * rx * sin_theta2 + sin_phi * ry * cos_theta2),
            to.1 + t * (sin_phi * rx * sin_theta2 - cos_phi * ry * cos_theta2),
        );

        self.theta = theta2;
        self.from = to;
        Some(CubicSegment { cp1, cp2, to })
    }
}

impl Iterator for ArcConverter {
    type Item = CubicSegment;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_segment()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_segs - self.seg_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcConverter {}

/// Angle from vector u to vector v, in `[0, 2π)`.
fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let ta = uy.atan2(ux);
    let tb = vy.atan2(vx);
    if tb >= ta {
        tb - ta
    } else {
        2. * PI - (ta - tb)
    }
}

/// Replace every arc segment in `path` with absolute cubic segments.
///
/// Other segments are returned unchanged, so relative commands following
/// an arc remain relative to the arc's end point. The exception is a smooth
/// cubic directly after an arc: it takes the current point as its first
/// control point, so it is written as an explicit cubic to avoid reflecting
/// the control point of the replacement curve.
pub fn arcs_to_cubics(path: &RoughPath) -> Vec<Segment> {
    let mut result = Vec::with_capacity(path.segments().len());
    let mut current: Point = (0., 0.);
    let mut after_arc = false;
    for s in path.segments() {
        let d = &s.data;
        match (s.command, s.point) {
            (Command::ArcTo | Command::ArcToRel, Some(to)) => {
                let (large_arc, sweep) = (d[3] != 0., d[4] != 0.);
                let arc = ArcConverter::new(current, to, (d[0], d[1]), d[2], large_arc, sweep);
                result.extend(arc.map(|c| {
                    Segment::from_parts(
                        Command::CubicTo,
                        vec![c.cp1.0, c.cp1.1, c.cp2.0, c.cp2.1, c.to.0, c.to.1],
                    )
                }));
            }
            (Command::SmoothCubicTo, _) if after_arc => {
                let data = vec![current.0, current.1, d[0], d[1], d[2], d[3]];
                result.push(Segment::from_parts(Command::CubicTo, data));
            }
            (Command::SmoothCubicToRel, _) if after_arc => {
                let data = vec![0., 0., d[0], d[1], d[2], d[3]];
                result.push(Segment::from_parts(Command::CubicToRel, data));
            }
            _ => result.push(Segment::from_parts(s.command, d.clone())),
        }
        after_arc = matches!(s.command, Command::ArcTo | Command::ArcToRel);
        if let Some(p) = s.point {
            current = p;
        }
    }
    result
}
