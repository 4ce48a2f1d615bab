//! Seastate - an interactive ocean surface viewer.
//!
//! A wgpu window shows a noise-displaced water patch; the "Ocean" panel
//! (F1 to toggle) enables the simulation and tunes its parameters live.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use seastate::camera::Camera;
use seastate::cli::Args;
use seastate::gui::GuiLayer;
use seastate::panel::OceanPanel;
use seastate::params::{OceanParameters, RenderConfig};
use seastate::renderer::{OceanHost, Renderer};
use seastate::rendering::{RenderSystem, Uniforms};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    gui: Option<GuiLayer>,

    // Simulation and editor
    renderer: Renderer,
    panel: OceanPanel,
    camera: Camera,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    last_frame: Instant,
}

impl App {
    fn new(args: &Args) -> Self {
        let mut renderer = Renderer::new();
        if !args.no_ocean {
            renderer.set_ocean_enabled(true, &OceanParameters::default());
        }
        let panel = OceanPanel::new(&renderer);
        let camera = Camera::new(args.elevation, 600.0);

        Self {
            window: None,
            render_system: None,
            gui: None,
            renderer,
            panel,
            camera,
            render_config: args.render_config(),
            last_frame: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Seastate - Ocean Viewer")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(Arc::clone(&window))) {
            Ok(rs) => rs,
            Err(e) => {
                log::error!("failed to initialize rendering: {e}");
                event_loop.exit();
                return;
            }
        };

        let gui = GuiLayer::new(&window, &render_system.device, render_system.surface_format());

        log::info!("seastate is running; Esc quits, F1 toggles the ocean panel");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.gui = Some(gui);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Give the UI first refusal on input events
        if let (Some(window), Some(gui)) = (&self.window, &mut self.gui) {
            let consumed = gui.on_window_event(window, &event);
            if consumed
                && !matches!(
                    event,
                    WindowEvent::CloseRequested | WindowEvent::RedrawRequested
                )
            {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::F1 => self.panel.open = !self.panel.open,
                _ => {}
            },
            WindowEvent::Resized(size) => {
                self.render_config.window_width = size.width.max(1);
                self.render_config.window_height = size.height.max(1);
                if let Some(rs) = &mut self.render_system {
                    rs.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame
    fn render_frame(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let (Some(render_system), Some(gui)) = (&mut self.render_system, &mut self.gui) else {
            return;
        };

        // Advance the simulation; clamp dt across stalls
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;
        self.renderer.update(dt);

        // Run the editor UI; panel edits mutate the renderer synchronously
        let panel = &mut self.panel;
        let renderer = &mut self.renderer;
        let gui_output = gui.run(window, |ctx| panel.ui(ctx, renderer));

        // Upload the (possibly rebuilt) mesh and this frame's uniforms
        let (view_proj, _eye) = self.camera.create_view_proj_matrix(&self.render_config);
        let draw_ocean = if let Some(ocean) = self.renderer.ocean() {
            render_system.upload_ocean(&ocean.grid);
            render_system.update_uniforms(&Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
                water_color: ocean.water_color.to_array(),
                time: ocean.time(),
                water_height: ocean.water_height,
                _padding: [0.0; 3],
            });
            true
        } else {
            false
        };

        match render_system.render(window, gui, gui_output, draw_ocean) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.inner_size();
                render_system.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                std::process::exit(1);
            }
            Err(e) => log::warn!("frame skipped: {e}"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut app = App::new(&args);

    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
