// src/geo/math.rs
//
// Spherical helpers for the rotation animator: centroid of a country's
// boundary rings and wrap-aware interpolation between projection rotations.

/// Centroid of a set of boundary rings as a (longitude, latitude) pair in
/// degrees. Computed as the normalized mean of the vertex unit vectors,
/// which is plenty for picking a rotation target.
pub fn spherical_centroid(rings: &[Vec<[f64; 2]>]) -> [f64; 2] {
    let (mut x, mut y, mut z) = (0.0f64, 0.0f64, 0.0f64);
    let mut count = 0usize;

    for ring in rings {
        for point in ring {
            let lambda = point[0].to_radians();
            let phi = point[1].to_radians();
            x += phi.cos() * lambda.cos();
            y += phi.cos() * lambda.sin();
            z += phi.sin();
            count += 1;
        }
    }

    if count == 0 {
        return [0.0, 0.0];
    }

    let norm = (x * x + y * y + z * z).sqrt();
    if norm < 1e-9 {
        // Degenerate ring set, e.g. antipodal cancellation
        return [0.0, 0.0];
    }

    [
        y.atan2(x).to_degrees(),
        (z / norm).asin().to_degrees(),
    ]
}

/// Interpolates per component along the shortest angular path, so a rotation
/// from 170 to -170 degrees crosses the antimeridian instead of sweeping
/// back through zero.
pub fn interpolate_rotation(start: [f64; 2], end: [f64; 2], t: f64) -> [f64; 2] {
    [
        start[0] + shortest_delta(start[0], end[0]) * t,
        start[1] + shortest_delta(start[1], end[1]) * t,
    ]
}

fn shortest_delta(from: f64, to: f64) -> f64 {
    let mut delta = (to - from) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta
}
