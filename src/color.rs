//! Linear/display color conversion for the water color picker.

use glam::Vec3;

/// Display gamma applied per channel when converting picker input
pub const DISPLAY_GAMMA: f32 = 2.2;

/// Convert a linear color to display space (per-channel `1/2.2` power).
///
/// The panel's color picker edits linear values; the simulation stores the
/// display-space color the shader consumes directly.
pub fn linear_to_display(linear: Vec3) -> Vec3 {
    let inv = 1.0 / DISPLAY_GAMMA;
    Vec3::new(linear.x.powf(inv), linear.y.powf(inv), linear.z.powf(inv))
}

/// Inverse of [`linear_to_display`], used to seed the picker from a live
/// simulation's color.
pub fn display_to_linear(display: Vec3) -> Vec3 {
    Vec3::new(
        display.x.powf(DISPLAY_GAMMA),
        display.y.powf(DISPLAY_GAMMA),
        display.z.powf(DISPLAY_GAMMA),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_gray_gamma() {
        let display = linear_to_display(Vec3::splat(0.5));

        // 0.5^(1/2.2) ≈ 0.7297
        assert!((display.x - 0.7297).abs() < 1e-3);
        assert_eq!(display.x, display.y);
        assert_eq!(display.y, display.z);
    }

    #[test]
    fn test_black_and_white_are_fixed_points() {
        assert_eq!(linear_to_display(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(linear_to_display(Vec3::ONE), Vec3::ONE);
    }

    #[test]
    fn test_display_to_linear_inverts() {
        let linear = Vec3::new(0.1, 0.5, 0.9);
        let back = display_to_linear(linear_to_display(linear));
        assert!((back - linear).abs().max_element() < 1e-5);
    }
}
