//! Renderer-side ownership of the ocean simulation.
//!
//! The editor panel never holds the simulation; it goes through [`OceanHost`]
//! on every interaction and tolerates the instance being absent.

use crate::ocean::OceanSimulation;
use crate::params::OceanParameters;

/// Seam between the settings panel and whatever owns the ocean.
///
/// Mirrors the renderer surface the panel needs: an accessor that may return
/// nothing, and an enable call that recreates the simulation from a full
/// parameter record.
pub trait OceanHost {
    /// Current simulation instance, if one exists
    fn ocean(&self) -> Option<&OceanSimulation>;

    /// Mutable access to the current simulation instance, if one exists
    fn ocean_mut(&mut self) -> Option<&mut OceanSimulation>;

    /// Enable or disable the ocean.
    ///
    /// Enabling always drops any existing instance and recreates it from
    /// `params`, so a parameter edit re-applies the full record. Disabling
    /// destroys the instance.
    fn set_ocean_enabled(&mut self, enabled: bool, params: &OceanParameters);
}

/// Owner of the live ocean simulation
#[derive(Default)]
pub struct Renderer {
    ocean: Option<OceanSimulation>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the simulation, if one exists
    pub fn update(&mut self, dt: f32) {
        if let Some(ocean) = &mut self.ocean {
            ocean.update(dt);
        }
    }
}

impl OceanHost for Renderer {
    fn ocean(&self) -> Option<&OceanSimulation> {
        self.ocean.as_ref()
    }

    fn ocean_mut(&mut self) -> Option<&mut OceanSimulation> {
        self.ocean.as_mut()
    }

    fn set_ocean_enabled(&mut self, enabled: bool, params: &OceanParameters) {
        if enabled {
            log::info!(
                "ocean (re)created: patch {:.0} m, amplitude {:.1}, choppiness {:.2}, \
                 wind dependency {:.2}, time scale {:.2}",
                params.patch_length,
                params.wave_amplitude,
                params.choppy_scale,
                params.wind_dependency,
                params.time_scale
            );
            self.ocean = Some(OceanSimulation::new(params));
        } else if self.ocean.take().is_some() {
            log::info!("ocean disabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_creates_instance_with_record() {
        let mut renderer = Renderer::new();
        assert!(renderer.ocean().is_none());

        let params = OceanParameters {
            patch_length: 500.0,
            ..OceanParameters::default()
        };
        renderer.set_ocean_enabled(true, &params);

        let ocean = renderer.ocean().expect("instance should exist");
        assert_eq!(ocean.params(), &params);
    }

    #[test]
    fn test_reenable_recreates_with_new_parameters() {
        let mut renderer = Renderer::new();
        renderer.set_ocean_enabled(true, &OceanParameters::default());

        // Instance-side edit, then a parameter re-apply
        renderer.ocean_mut().unwrap().water_height = 25.0;
        let params = OceanParameters {
            wave_amplitude: 80.0,
            ..OceanParameters::default()
        };
        renderer.set_ocean_enabled(true, &params);

        // Fresh instance: new record applied, instance-side edit gone
        let ocean = renderer.ocean().unwrap();
        assert_eq!(ocean.params().wave_amplitude, 80.0);
        assert_eq!(ocean.water_height, 0.0);
    }

    #[test]
    fn test_disable_drops_instance() {
        let mut renderer = Renderer::new();
        renderer.set_ocean_enabled(true, &OceanParameters::default());
        renderer.set_ocean_enabled(false, &OceanParameters::default());
        assert!(renderer.ocean().is_none());
        assert!(renderer.ocean_mut().is_none());

        // Disabling an already-absent ocean is a no-op
        renderer.set_ocean_enabled(false, &OceanParameters::default());
        assert!(renderer.ocean().is_none());
    }

    #[test]
    fn test_update_without_instance_is_noop() {
        let mut renderer = Renderer::new();
        renderer.update(0.016);
        assert!(renderer.ocean().is_none());
    }
}
