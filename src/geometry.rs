use glam::Vec3;

/// z of the triangle's face normal; positive for counter-clockwise in the xy plane
pub fn winding(triangle: &[Vec3]) -> f32 {
    (triangle[1] - triangle[0])
        .cross(triangle[2] - triangle[0])
        .z
}

/// Axis-aligned min/max corners of a flat xyz stream.
pub fn bounds(positions: &[f32]) -> Option<(Vec3, Vec3)> {
    positions
        .chunks_exact(3)
        .map(Vec3::from_slice)
        .fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((min, max)) => Some((min.min(p), max.max(p))),
        })
}
