use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use winit::window::Window;

use crate::config::PlayerConfig;
use crate::gpu::{GpuContext, clear_color};
use crate::player::Player;
use crate::ui::EguiOverlay;
use crate::ui::panels::{draw_panels, take_intents};

pub struct App {
    pub gpu: GpuContext,
    pub egui_overlay: EguiOverlay,
    pub window: Arc<Window>,
    pub player: Player,
    pub last_frame: Instant,
    pub quit_requested: bool,
}

impl App {
    pub fn new(window: Arc<Window>, config: &PlayerConfig, live: bool) -> Result<Self> {
        let gpu = GpuContext::new(window.clone())?;
        let theme = config.theme.resolve();
        log::info!("Theme: {}", theme.display_name());
        let egui_overlay = EguiOverlay::new(&gpu.device, gpu.format, &window, theme);

        let player = Player::new(config, live, Some(Box::new(window.clone())));

        Ok(Self {
            gpu,
            egui_overlay,
            window,
            player,
            last_frame: Instant::now(),
            quit_requested: false,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.egui_overlay
            .resize(width, height, self.window.scale_factor() as f32);
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.player.update(dt);
    }

    /// Run one UI pass, then apply what the user did during it.
    pub fn run_ui(&mut self) {
        self.egui_overlay.begin_frame(&self.window);
        let ctx = self.egui_overlay.context();
        {
            let info = self.player.info(self.window.fullscreen().is_some());
            draw_panels(&ctx, &info);
        }
        self.egui_overlay.end_frame(&self.window);

        let intents = take_intents(&ctx);
        if !intents.is_empty() {
            self.player.apply_intents(intents);
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.surface.get_current_texture()?;
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.gpu
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("scrubber-encoder"),
                });

        let background = clear_color(self.egui_overlay.theme.colors().canvas);
        self.egui_overlay.render(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &surface_view,
            background,
        );

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
