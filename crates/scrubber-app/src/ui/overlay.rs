use egui::{Context, FontId, TextStyle};
use winit::event::WindowEvent;
use winit::window::Window;

use super::theme::ThemeMode;
use super::theme::colors::set_theme_colors;
use super::theme::tokens::*;

/// Tessellated output of one UI pass, waiting to be drawn.
#[derive(Default)]
struct PendingFrame {
    primitives: Vec<egui::ClippedPrimitive>,
    textures: egui::TexturesDelta,
}

/// Runs egui on top of winit and draws its output with wgpu.
pub struct EguiOverlay {
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    pub theme: ThemeMode,
    pending: PendingFrame,
    screen: egui_wgpu::ScreenDescriptor,
}

impl EguiOverlay {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        window: &Window,
        theme: ThemeMode,
    ) -> Self {
        let ctx = Context::default();
        apply_theme(&ctx, theme);

        let viewport_id = ctx.viewport_id();
        let state = egui_winit::State::new(ctx, viewport_id, window, None, None, None);
        let renderer =
            egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        let size = window.inner_size();
        Self {
            state,
            renderer,
            theme,
            pending: PendingFrame::default(),
            screen: egui_wgpu::ScreenDescriptor {
                size_in_pixels: [size.width, size.height],
                pixels_per_point: window.scale_factor() as f32,
            },
        }
    }

    /// Feed a window event to egui. Returns true when egui consumed it.
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn context(&self) -> Context {
        self.state.egui_ctx().clone()
    }

    pub fn resize(&mut self, width: u32, height: u32, pixels_per_point: f32) {
        self.screen.size_in_pixels = [width, height];
        self.screen.pixels_per_point = pixels_per_point;
    }

    pub fn begin_frame(&mut self, window: &Window) {
        let input = self.state.take_egui_input(window);
        self.state.egui_ctx().begin_pass(input);
    }

    pub fn end_frame(&mut self, window: &Window) {
        let ctx = self.state.egui_ctx().clone();
        let output = ctx.end_pass();
        self.state.handle_platform_output(window, output.platform_output);
        self.pending = PendingFrame {
            primitives: ctx.tessellate(output.shapes, output.pixels_per_point),
            textures: output.textures_delta,
        };
    }

    /// Clear `view` to `background` and draw the pending frame over it.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        background: wgpu::Color,
    ) {
        let frame = std::mem::take(&mut self.pending);
        for (id, delta) in &frame.textures.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.primitives, &self.screen);

        let mut pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("player-ui"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(background),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();
        self.renderer.render(&mut pass, &frame.primitives, &self.screen);
        drop(pass);

        for id in &frame.textures.free {
            self.renderer.free_texture(id);
        }
    }
}

/// Install visuals, player colors and the control-strip sizing on `ctx`.
fn apply_theme(ctx: &Context, theme: ThemeMode) {
    // Pin egui's own theme so an OS light/dark switch does not swap our visuals out.
    ctx.set_theme(if theme.palette().dark {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    ctx.set_visuals(theme.visuals());
    set_theme_colors(ctx, theme.colors());

    ctx.style_mut(|style| {
        style.spacing.interact_size = egui::vec2(MIN_INTERACT_WIDTH, MIN_INTERACT_HEIGHT);
        style.spacing.item_spacing = egui::vec2(SPACING, SPACING_Y);
        style.spacing.button_padding = egui::vec2(6.0, 2.0);
        for (text_style, font) in [
            (TextStyle::Body, FontId::proportional(BODY_SIZE)),
            (TextStyle::Button, FontId::proportional(BODY_SIZE)),
            (TextStyle::Small, FontId::proportional(SMALL_SIZE)),
            (TextStyle::Heading, FontId::proportional(HEADING_SIZE)),
            (TextStyle::Monospace, FontId::monospace(MONO_SIZE)),
        ] {
            style.text_styles.insert(text_style, font);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::colors::theme_colors;

    #[test]
    fn theme_installs_colors_and_sizes() {
        let ctx = Context::default();
        apply_theme(&ctx, ThemeMode::Light);
        assert!(!ctx.style().visuals.dark_mode);
        assert_eq!(theme_colors(&ctx), ThemeMode::Light.colors());
        assert_eq!(ctx.style().spacing.interact_size.y, MIN_INTERACT_HEIGHT);
        assert_eq!(
            ctx.style().text_styles.get(&TextStyle::Small),
            Some(&FontId::proportional(SMALL_SIZE))
        );
    }
}
