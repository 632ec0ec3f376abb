// src/geo/projection.rs
//
// Orthographic globe projection with a d3-style rotation pair.
// The clip angle is fixed at 90 degrees: anything past the horizon is
// simply not projected.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct Orthographic {
    rotation: [f64; 2],
    scale: f64,
    translate: Point2,
}

impl Orthographic {
    pub fn new(scale: f64, translate: Point2) -> Self {
        Self {
            rotation: [0.0, 0.0],
            scale,
            translate,
        }
    }

    pub fn rotation(&self) -> [f64; 2] {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: [f64; 2]) {
        self.rotation = rotation;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn translate(&self) -> Point2 {
        self.translate
    }

    pub fn set_translate(&mut self, translate: Point2) {
        self.translate = translate;
    }

    /// Projects (longitude, latitude) in degrees to window coordinates.
    /// Returns None for points on the far hemisphere.
    pub fn project(&self, lon: f64, lat: f64) -> Option<Point2> {
        let delta_lambda = self.rotation[0].to_radians();
        let delta_phi = self.rotation[1].to_radians();

        let lambda = lon.to_radians() + delta_lambda;
        let phi = lat.to_radians();

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();

        // Rotate the latitude axis; the third Euler angle stays zero
        let k = z * delta_phi.cos() + x * delta_phi.sin();
        let depth = x * delta_phi.cos() - z * delta_phi.sin();

        // depth is the cosine of the angular distance to the view center
        if depth < 0.0 {
            return None;
        }

        Some(pt2(
            self.translate.x + (self.scale * y) as f32,
            self.translate.y + (self.scale * k) as f32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_point_projects_to_translate() {
        let mut projection = Orthographic::new(200.0, pt2(10.0, -20.0));
        // Rotating by the negated coordinates centers the point
        projection.set_rotation([-47.9, 10.2]);
        let p = projection.project(47.9, -10.2).unwrap();
        assert!((p.x - 10.0).abs() < 1e-3);
        assert!((p.y - -20.0).abs() < 1e-3);
    }

    #[test]
    fn test_equator_points_at_scale_radius() {
        let projection = Orthographic::new(100.0, pt2(0.0, 0.0));
        let p = projection.project(90.0, 0.0).unwrap();
        assert!((p.x - 100.0).abs() < 1e-3);
        assert!(p.y.abs() < 1e-3);

        let p = projection.project(0.0, 90.0).unwrap();
        assert!(p.x.abs() < 1e-3);
        assert!((p.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_far_hemisphere_is_clipped() {
        let projection = Orthographic::new(100.0, pt2(0.0, 0.0));
        assert!(projection.project(179.0, 0.0).is_none());
        assert!(projection.project(0.0, 0.0).is_some());
    }

    #[test]
    fn test_scale_change_leaves_rotation_alone() {
        let mut projection = Orthographic::new(100.0, pt2(0.0, 0.0));
        projection.set_rotation([-12.0, 34.0]);
        projection.set_scale(250.0);
        projection.set_translate(pt2(5.0, 5.0));
        assert_eq!(projection.rotation(), [-12.0, 34.0]);
    }
}
