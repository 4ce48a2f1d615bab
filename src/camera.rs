//! Fixed viewpoint over the water patch.

use glam::{Mat4, Vec3};

use crate::params::RenderConfig;

/// Stationary camera looking across the patch toward the horizon
pub struct Camera {
    /// Height above the water plane (meters)
    pub elevation_m: f32,

    /// Distance behind the patch center (meters)
    pub distance_m: f32,
}

impl Camera {
    pub fn new(elevation_m: f32, distance_m: f32) -> Self {
        Self {
            elevation_m,
            distance_m,
        }
    }

    /// Create the view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, eye_position)
    pub fn create_view_proj_matrix(&self, config: &RenderConfig) -> (Mat4, Vec3) {
        let eye = Vec3::new(0.0, self.elevation_m, -self.distance_m);
        // Aim slightly below the horizon so most of the frame is water
        let target = Vec3::new(0.0, 0.0, self.distance_m * 0.5);
        let up = Vec3::Y;

        let view = Mat4::look_at_rh(eye, target, up);
        let proj = Mat4::perspective_rh(
            config.fov_degrees.to_radians(),
            config.aspect_ratio(),
            config.near_plane_m,
            config.far_plane_m,
        );

        (proj * view, eye)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(60.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = Camera::default();
        let config = RenderConfig::default();

        let (view_proj, eye) = camera.create_view_proj_matrix(&config);

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(eye.x.is_finite());
        assert!(eye.y.is_finite());
        assert!(eye.z.is_finite());
        assert_eq!(eye.y, camera.elevation_m);
    }

    #[test]
    fn test_patch_center_projects_in_front_of_camera() {
        let camera = Camera::default();
        let config = RenderConfig::default();
        let (view_proj, _) = camera.create_view_proj_matrix(&config);

        let clip = view_proj * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.w > 0.0, "patch center should be in front of the camera");
    }
}
