/// A 2D point in user coordinates, as `(x, y)`.
///
/// Points are plain values and are copied rather than shared.
pub type Point = (f64, f64);

/// Euclidean distance between two points.
pub fn line_length(a: Point, b: Point) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}
