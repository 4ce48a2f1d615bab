//! egui integration: winit event translation and wgpu painting.

use winit::event::WindowEvent;
use winit::window::Window;

/// egui context plus the winit/wgpu glue around it
pub struct GuiLayer {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    /// Textures scheduled for release once the previous frame is done
    pending_free: Vec<egui::TextureId>,
}

impl GuiLayer {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            None,
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
            pending_free: Vec::new(),
        }
    }

    /// Feed a winit event to egui; returns true when egui consumed it
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run one egui pass over the given UI builder
    pub fn run(
        &mut self,
        window: &Window,
        build_ui: impl FnMut(&egui::Context),
    ) -> egui::FullOutput {
        let input = self.state.take_egui_input(window);
        self.ctx.run(input, build_ui)
    }

    /// Upload this frame's egui data to the GPU.
    ///
    /// Returns the tessellated primitives for [`Self::paint`] and any command
    /// buffers produced by paint callbacks (submit them before the frame's
    /// encoder).
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        output: egui::FullOutput,
        screen: &egui_wgpu::ScreenDescriptor,
    ) -> (Vec<egui::ClippedPrimitive>, Vec<wgpu::CommandBuffer>) {
        // Textures freed last frame are safe to release now
        for id in self.pending_free.drain(..) {
            self.renderer.free_texture(&id);
        }

        self.state
            .handle_platform_output(window, output.platform_output);

        for (id, delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }

        let clipped = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        let callback_cmds = self
            .renderer
            .update_buffers(device, queue, encoder, &clipped, screen);

        self.pending_free = output.textures_delta.free;

        (clipped, callback_cmds)
    }

    /// Paint the prepared primitives into the frame's render pass
    pub fn paint(
        &self,
        pass: &mut wgpu::RenderPass<'static>,
        clipped: &[egui::ClippedPrimitive],
        screen: &egui_wgpu::ScreenDescriptor,
    ) {
        self.renderer.render(pass, clipped, screen);
    }
}
