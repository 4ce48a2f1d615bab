//! Live ocean surface: grid mesh plus procedural noise displacement.
//!
//! This is the renderer-owned simulation instance. The full spectral wave
//! solver lives outside this project; the surface here is a noise-displaced
//! grid that reacts to every tunable parameter so the editor panel has
//! something live to drive.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use noise::{NoiseFn, Perlin};

use crate::params::OceanParameters;

/// Vertex data for the ocean mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Panel slider units → meters of vertical displacement
const AMPLITUDE_SCALE: f32 = 0.01;

/// Spatial frequency of the noise field (cycles per meter)
const WAVE_FREQUENCY: f32 = 0.004;

/// Wind drift speed at full wind dependency (meters per second)
const WIND_DRIFT_SPEED: f32 = 30.0;

/// Grid vertices per side for each surface-detail step
const VERTICES_PER_DETAIL: u32 = 32;

/// Noise seed (fixed; the surface is deterministic for a given time)
const NOISE_SEED: u32 = 42;

/// Default surface detail level (grid resolution exponent, 1-10)
pub const DEFAULT_SURFACE_DETAIL: u32 = 4;

/// Default horizontal displacement clamp in meters
pub const DEFAULT_DISPLACEMENT_TOLERANCE: f32 = 2.0;

/// Default water color in display space
pub const DEFAULT_WATER_COLOR: Vec3 = Vec3::new(0.07, 0.15, 0.2);

/// Flat XZ grid covering one water patch
pub struct OceanGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Undisplaced XZ lattice positions, kept so displacement is absolute
    /// rather than accumulated
    base: Vec<[f32; 2]>,
    resolution: usize,
    spacing: f32,
}

impl OceanGrid {
    /// Create a grid spanning `patch_length` meters per side.
    ///
    /// `detail` (1-10) selects resolution: `32 * detail` quads per side.
    pub fn new(patch_length: f32, detail: u32) -> Self {
        let resolution = (VERTICES_PER_DETAIL * detail.clamp(1, 10)) as usize;
        let spacing = patch_length / resolution as f32;
        let half_size = patch_length / 2.0;

        let mut vertices = Vec::with_capacity((resolution + 1).pow(2));
        let mut base = Vec::with_capacity((resolution + 1).pow(2));
        let mut indices = Vec::with_capacity(resolution.pow(2) * 6);

        for z in 0..=resolution {
            for x in 0..=resolution {
                let x_pos = x as f32 * spacing - half_size;
                let z_pos = z as f32 * spacing - half_size;

                vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                    uv: [x as f32 / resolution as f32, z as f32 / resolution as f32],
                });
                base.push([x_pos, z_pos]);
            }
        }

        // Triangle indices, counter-clockwise winding
        for z in 0..resolution {
            for x in 0..resolution {
                let top_left = (z * (resolution + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (resolution + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            base,
            resolution,
            spacing,
        }
    }

    /// Grid resolution (quads per side)
    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

/// Live ocean simulation instance.
///
/// Created and destroyed only by the renderer. Water level, displacement
/// tolerance and color are mutated directly by the editor panel; surface
/// detail goes through a setter because it rebuilds the mesh.
pub struct OceanSimulation {
    params: OceanParameters,

    /// Water plane height in meters (applied in the vertex shader)
    pub water_height: f32,

    /// Clamp on horizontal wave displacement in meters
    pub displacement_tolerance: f32,

    /// Water color in display space
    pub water_color: Vec3,

    surface_detail: u32,
    pub grid: OceanGrid,
    perlin: Perlin,
    time: f32,
}

impl OceanSimulation {
    /// Create a simulation from the given parameter record
    pub fn new(params: &OceanParameters) -> Self {
        let grid = OceanGrid::new(params.patch_length, DEFAULT_SURFACE_DETAIL);
        Self {
            params: params.clone(),
            water_height: 0.0,
            displacement_tolerance: DEFAULT_DISPLACEMENT_TOLERANCE,
            water_color: DEFAULT_WATER_COLOR,
            surface_detail: DEFAULT_SURFACE_DETAIL,
            grid,
            perlin: Perlin::new(NOISE_SEED),
            time: 0.0,
        }
    }

    /// Parameter record this simulation was created from
    pub fn params(&self) -> &OceanParameters {
        &self.params
    }

    /// Current animation time in seconds (already scaled by `time_scale`)
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn surface_detail(&self) -> u32 {
        self.surface_detail
    }

    /// Set the surface detail level (1-10), rebuilding the grid if it changed
    pub fn set_surface_detail(&mut self, detail: u32) {
        let detail = detail.clamp(1, 10);
        if detail != self.surface_detail {
            self.surface_detail = detail;
            self.grid = OceanGrid::new(self.params.patch_length, detail);
        }
    }

    /// Advance the animation clock and displace the grid vertices.
    ///
    /// Vertical displacement is Perlin noise scaled by the wave amplitude;
    /// horizontal chop follows the noise gradient, scaled by `choppy_scale`
    /// and clamped to `displacement_tolerance`. Wind dependency drifts the
    /// sampling position downwind over time.
    pub fn update(&mut self, dt: f32) {
        self.time += dt * self.params.time_scale;

        let amplitude = self.params.wave_amplitude * AMPLITUDE_SCALE;
        let chop = self.params.choppy_scale;
        let max_offset = self.displacement_tolerance;
        let drift = self.time * self.params.wind_dependency * WIND_DRIFT_SPEED;
        let t = self.time as f64 * 0.1;
        let eps = self.grid.spacing.max(0.01);

        let sample = |perlin: &Perlin, x: f32, z: f32| -> f32 {
            perlin.get([
                (x * WAVE_FREQUENCY) as f64,
                ((z - drift) * WAVE_FREQUENCY) as f64,
                t,
            ]) as f32
        };

        for (vertex, base) in self.grid.vertices.iter_mut().zip(&self.grid.base) {
            let [x0, z0] = *base;

            let n = sample(&self.perlin, x0, z0);

            // Chop displaces vertices toward crests, against the gradient
            let grad_x = (sample(&self.perlin, x0 + eps, z0) - n) / eps;
            let grad_z = (sample(&self.perlin, x0, z0 + eps) - n) / eps;
            let dx = (-grad_x * chop * amplitude * 50.0).clamp(-max_offset, max_offset);
            let dz = (-grad_z * chop * amplitude * 50.0).clamp(-max_offset, max_offset);

            vertex.position = [x0 + dx, n * amplitude, z0 + dz];
        }
    }
}
