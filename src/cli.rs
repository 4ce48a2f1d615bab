//! Command-line argument parsing.

use clap::Parser;

use crate::params::RenderConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Seastate")]
#[command(about = "Interactive ocean surface viewer with a live settings panel", long_about = None)]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "720")]
    pub height: u32,

    /// Camera height above the water plane (meters)
    #[arg(long, value_name = "METERS", default_value = "60")]
    pub elevation: f32,

    /// Vertical field of view (degrees)
    #[arg(long, value_name = "DEGREES", default_value = "60")]
    pub fov: f32,

    /// Start with the ocean simulation disabled
    #[arg(long)]
    pub no_ocean: bool,
}

impl Args {
    /// Build the rendering configuration from the parsed arguments
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            fov_degrees: self.fov,
            ..RenderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["seastate"]);
        assert_eq!(args.width, 1280);
        assert_eq!(args.height, 720);
        assert!(!args.no_ocean);

        let config = args.render_config();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.fov_degrees, 60.0);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["seastate", "--width", "800", "--height", "600", "--no-ocean"]);
        assert_eq!(args.render_config().window_height, 600);
        assert!(args.no_ocean);
    }
}
