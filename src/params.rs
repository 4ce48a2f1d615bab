//! Parameter definitions with physical units and documented semantics.

/// Ocean simulation parameters.
///
/// This is the record the settings panel owns and hands to the renderer's
/// enable call. The live simulation keeps its own copy; editing a field here
/// only takes effect through [`crate::renderer::OceanHost::set_ocean_enabled`].
#[derive(Debug, Clone, PartialEq)]
pub struct OceanParameters {
    /// Side length of the simulated water patch in meters
    pub patch_length: f32,

    /// Wave amplitude (panel units, 0-100; the surface displaces
    /// `wave_amplitude * 0.01` meters at the crests)
    pub wave_amplitude: f32,

    /// Horizontal choppiness of wave crests (dimensionless)
    pub choppy_scale: f32,

    /// How strongly waves drift with the wind (0 = still, 1 = fully
    /// wind-driven)
    pub wind_dependency: f32,

    /// Animation speed multiplier (dimensionless)
    pub time_scale: f32,
}

impl Default for OceanParameters {
    fn default() -> Self {
        Self {
            patch_length: 1000.0,
            wave_amplitude: 35.0, // 0.35 m of displacement
            choppy_scale: 1.3,
            wind_dependency: 0.07,
            time_scale: 0.8,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    /// Far enough to keep the largest patch size fully in view
    pub far_plane_m: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 60.0,
            near_plane_m: 0.1,
            far_plane_m: 5000.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_within_panel_ranges() {
        let params = OceanParameters::default();

        assert!((1.0..=2000.0).contains(&params.patch_length));
        assert!((0.0..=100.0).contains(&params.wave_amplitude));
        assert!((0.0..=10.0).contains(&params.choppy_scale));
        assert!((0.0..=1.0).contains(&params.wind_dependency));
        assert!((0.0..=4.0).contains(&params.time_scale));
    }

    #[test]
    fn test_aspect_ratio() {
        let config = RenderConfig::default();
        assert!((config.aspect_ratio() - 1280.0 / 720.0).abs() < f32::EPSILON);
    }
}
