//! Ocean settings panel: widgets wired to the renderer.
//!
//! Pure UI glue. The panel owns a parameter record and forwards every edit to
//! an [`OceanHost`]: parameter sliders re-apply the whole record through the
//! enable call, instance sliders mutate the live simulation directly and are
//! silently skipped while no simulation exists.

use std::ops::RangeInclusive;

use glam::Vec3;

use crate::color::{display_to_linear, linear_to_display};
use crate::ocean::{DEFAULT_DISPLACEMENT_TOLERANCE, DEFAULT_SURFACE_DETAIL, DEFAULT_WATER_COLOR};
use crate::params::OceanParameters;
use crate::renderer::OceanHost;

const PATCH_SIZE_RANGE: RangeInclusive<f32> = 1.0..=2000.0;
const WAVE_AMPLITUDE_RANGE: RangeInclusive<f32> = 0.0..=100.0;
const CHOPPINESS_RANGE: RangeInclusive<f32> = 0.0..=10.0;
const WIND_DEPENDENCY_RANGE: RangeInclusive<f32> = 0.0..=1.0;
const TIME_SCALE_RANGE: RangeInclusive<f32> = 0.0..=4.0;
const WATER_LEVEL_RANGE: RangeInclusive<f32> = -100.0..=100.0;
const SURFACE_DETAIL_RANGE: RangeInclusive<u32> = 1..=10;
const TOLERANCE_RANGE: RangeInclusive<f32> = 1.0..=10.0;

/// Editor panel for the ocean simulation
pub struct OceanPanel {
    /// Whether the panel window is shown (F1 toggles it)
    pub open: bool,

    enabled: bool,
    params: OceanParameters,

    // Instance-side widget state, mirrored into the live simulation
    water_level: f32,
    surface_detail: u32,
    displacement_tolerance: f32,
    /// Picker-side color, linear space
    water_color: [f32; 3],
}

impl OceanPanel {
    /// Create the panel, syncing its widget state from the host.
    ///
    /// The checkbox reflects whether a simulation currently exists, and the
    /// instance-side widgets are seeded from it when it does.
    pub fn new(host: &impl OceanHost) -> Self {
        match host.ocean() {
            Some(ocean) => Self {
                open: true,
                enabled: true,
                params: ocean.params().clone(),
                water_level: ocean.water_height,
                surface_detail: ocean.surface_detail(),
                displacement_tolerance: ocean.displacement_tolerance,
                water_color: display_to_linear(ocean.water_color).to_array(),
            },
            None => Self {
                open: true,
                enabled: false,
                params: OceanParameters::default(),
                water_level: 0.0,
                surface_detail: DEFAULT_SURFACE_DETAIL,
                displacement_tolerance: DEFAULT_DISPLACEMENT_TOLERANCE,
                water_color: display_to_linear(DEFAULT_WATER_COLOR).to_array(),
            },
        }
    }

    /// Re-apply the full parameter record with the current enabled flag
    fn apply_ocean(&self, host: &mut impl OceanHost) {
        host.set_ocean_enabled(self.enabled, &self.params);
    }

    fn apply_water_level(&self, host: &mut impl OceanHost) {
        if let Some(ocean) = host.ocean_mut() {
            ocean.water_height = self.water_level;
        }
    }

    fn apply_surface_detail(&self, host: &mut impl OceanHost) {
        if let Some(ocean) = host.ocean_mut() {
            ocean.set_surface_detail(self.surface_detail);
        }
    }

    fn apply_displacement_tolerance(&self, host: &mut impl OceanHost) {
        if let Some(ocean) = host.ocean_mut() {
            ocean.displacement_tolerance = self.displacement_tolerance;
        }
    }

    fn apply_water_color(&self, host: &mut impl OceanHost) {
        if let Some(ocean) = host.ocean_mut() {
            ocean.water_color = linear_to_display(Vec3::from_array(self.water_color));
        }
    }

    /// Show the panel window and forward any edits to the host
    pub fn ui(&mut self, ctx: &egui::Context, host: &mut impl OceanHost) {
        let mut open = self.open;
        egui::Window::new("Ocean")
            .default_width(340.0)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| self.contents(ui, host));
        self.open = open;
    }

    fn contents(&mut self, ui: &mut egui::Ui, host: &mut impl OceanHost) {
        if ui
            .checkbox(&mut self.enabled, "Ocean simulation enabled")
            .changed()
        {
            self.apply_ocean(host);
        }

        ui.separator();
        ui.label("Simulation parameters (re-create the ocean)");

        if ui
            .add(egui::Slider::new(&mut self.params.patch_length, PATCH_SIZE_RANGE).text("Patch size (m)"))
            .changed()
        {
            self.apply_ocean(host);
        }
        if ui
            .add(
                egui::Slider::new(&mut self.params.wave_amplitude, WAVE_AMPLITUDE_RANGE)
                    .text("Wave amplitude"),
            )
            .changed()
        {
            self.apply_ocean(host);
        }
        if ui
            .add(egui::Slider::new(&mut self.params.choppy_scale, CHOPPINESS_RANGE).text("Choppiness"))
            .changed()
        {
            self.apply_ocean(host);
        }
        if ui
            .add(
                egui::Slider::new(&mut self.params.wind_dependency, WIND_DEPENDENCY_RANGE)
                    .text("Wind dependency"),
            )
            .changed()
        {
            self.apply_ocean(host);
        }
        if ui
            .add(egui::Slider::new(&mut self.params.time_scale, TIME_SCALE_RANGE).text("Time scale"))
            .changed()
        {
            self.apply_ocean(host);
        }

        ui.separator();
        ui.label("Live surface (no effect while disabled)");

        if ui
            .add(egui::Slider::new(&mut self.water_level, WATER_LEVEL_RANGE).text("Water level (m)"))
            .changed()
        {
            self.apply_water_level(host);
        }
        if ui
            .add(
                egui::Slider::new(&mut self.surface_detail, SURFACE_DETAIL_RANGE)
                    .text("Surface detail"),
            )
            .changed()
        {
            self.apply_surface_detail(host);
        }
        if ui
            .add(
                egui::Slider::new(&mut self.displacement_tolerance, TOLERANCE_RANGE)
                    .text("Displacement tolerance (m)"),
            )
            .changed()
        {
            self.apply_displacement_tolerance(host);
        }

        let color_changed = ui
            .horizontal(|ui| {
                ui.label("Water color");
                ui.color_edit_button_rgb(&mut self.water_color).changed()
            })
            .inner;
        if color_changed {
            self.apply_water_color(host);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::OceanSimulation;

    /// Host double that records every enable call and mirrors the renderer's
    /// recreate/drop semantics
    #[derive(Default)]
    struct RecordingHost {
        ocean: Option<OceanSimulation>,
        enable_calls: Vec<(bool, OceanParameters)>,
    }

    impl OceanHost for RecordingHost {
        fn ocean(&self) -> Option<&OceanSimulation> {
            self.ocean.as_ref()
        }

        fn ocean_mut(&mut self) -> Option<&mut OceanSimulation> {
            self.ocean.as_mut()
        }

        fn set_ocean_enabled(&mut self, enabled: bool, params: &OceanParameters) {
            self.enable_calls.push((enabled, params.clone()));
            self.ocean = enabled.then(|| OceanSimulation::new(params));
        }
    }

    fn enabled_host() -> RecordingHost {
        let mut host = RecordingHost::default();
        host.ocean = Some(OceanSimulation::new(&OceanParameters::default()));
        host
    }

    #[test]
    fn test_toggle_makes_exactly_one_enable_call() {
        let mut host = RecordingHost::default();
        let mut panel = OceanPanel::new(&host);

        panel.enabled = true;
        panel.apply_ocean(&mut host);

        assert_eq!(host.enable_calls.len(), 1);
        assert_eq!(host.enable_calls[0], (true, panel.params.clone()));
        assert!(host.ocean().is_some());
    }

    #[test]
    fn test_slider_edit_updates_field_and_reapplies_record() {
        let mut host = enabled_host();
        let mut panel = OceanPanel::new(&host);

        panel.params.wave_amplitude = 80.0;
        panel.apply_ocean(&mut host);

        // Only the edited field differs from the default record
        let (enabled, applied) = host.enable_calls.last().unwrap();
        assert!(*enabled);
        assert_eq!(applied.wave_amplitude, 80.0);
        assert_eq!(
            OceanParameters {
                wave_amplitude: 80.0,
                ..OceanParameters::default()
            },
            *applied
        );
    }

    #[test]
    fn test_slider_edit_while_disabled_keeps_ocean_off() {
        let mut host = RecordingHost::default();
        let mut panel = OceanPanel::new(&host);

        panel.params.patch_length = 250.0;
        panel.apply_ocean(&mut host);

        assert_eq!(host.enable_calls.last().unwrap().0, false);
        assert!(host.ocean().is_none());
    }

    #[test]
    fn test_instance_edits_without_simulation_are_noops() {
        let mut host = RecordingHost::default();
        let mut panel = OceanPanel::new(&host);

        panel.water_level = 42.0;
        panel.apply_water_level(&mut host);
        panel.surface_detail = 9;
        panel.apply_surface_detail(&mut host);
        panel.displacement_tolerance = 7.0;
        panel.apply_displacement_tolerance(&mut host);
        panel.water_color = [0.5, 0.5, 0.5];
        panel.apply_water_color(&mut host);

        // Nothing to mutate, nothing created, no enable call issued
        assert!(host.ocean().is_none());
        assert!(host.enable_calls.is_empty());
    }

    #[test]
    fn test_instance_edits_reach_live_simulation() {
        let mut host = enabled_host();
        let mut panel = OceanPanel::new(&host);

        panel.water_level = -12.5;
        panel.apply_water_level(&mut host);
        panel.surface_detail = 6;
        panel.apply_surface_detail(&mut host);
        panel.displacement_tolerance = 4.0;
        panel.apply_displacement_tolerance(&mut host);

        let ocean = host.ocean().unwrap();
        assert_eq!(ocean.water_height, -12.5);
        assert_eq!(ocean.surface_detail(), 6);
        assert_eq!(ocean.displacement_tolerance, 4.0);
        // Direct mutations issue no enable calls
        assert!(host.enable_calls.is_empty());
    }

    #[test]
    fn test_color_selection_applies_gamma() {
        let mut host = enabled_host();
        let mut panel = OceanPanel::new(&host);

        panel.water_color = [0.5, 0.5, 0.5];
        panel.apply_water_color(&mut host);

        // linear 0.5 → displayed ≈ 0.7297
        let color = host.ocean().unwrap().water_color;
        assert!((color.x - 0.7297).abs() < 1e-3);
        assert_eq!(color.x, color.y);
        assert_eq!(color.y, color.z);
    }

    #[test]
    fn test_panel_syncs_from_live_state() {
        let mut host = enabled_host();
        {
            let ocean = host.ocean_mut().unwrap();
            ocean.water_height = 7.0;
            ocean.set_surface_detail(2);
        }

        let panel = OceanPanel::new(&host);
        assert!(panel.enabled);
        assert_eq!(panel.water_level, 7.0);
        assert_eq!(panel.surface_detail, 2);

        let empty = RecordingHost::default();
        let panel = OceanPanel::new(&empty);
        assert!(!panel.enabled);
    }
}
