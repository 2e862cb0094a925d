//! Planar distance and angle primitives. The `z` coordinate is ignored.

use crate::types::Landmark;

/// Euclidean distance between two points.
pub fn distance(p1: &Landmark, p2: &Landmark) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle in degrees at vertex `p2` of the triangle `p1 p2 p3`, via the law of cosines.
///
/// Returns 0 when either side touching the vertex has zero length.
pub fn angle(p1: &Landmark, p2: &Landmark, p3: &Landmark) -> f64 {
    let a = distance(p1, p2);
    let b = distance(p2, p3);
    let c = distance(p1, p3);

    if a == 0.0 || b == 0.0 {
        return 0.0;
    }

    // Rounding can push the cosine just outside [-1, 1].
    let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
