mod app;
mod config;
mod elements;
mod gpu;
mod playback;
mod player;
mod timeline;
mod transport;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use app::App;
use config::PlayerConfig;

/// Command line: `--config <path>` and `--live`.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config: Option<PathBuf>,
    live: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => match args.next() {
                    Some(path) => parsed.config = Some(PathBuf::from(path)),
                    None => bail!("--config needs a path"),
                },
                "--live" => parsed.live = true,
                other => log::warn!("Ignoring unknown argument {other:?}"),
            }
        }
        Ok(parsed)
    }
}

struct ScrubberApp {
    app: Option<App>,
    window: Option<Arc<Window>>,
    config: PlayerConfig,
    live: bool,
}

impl ScrubberApp {
    fn new(config: PlayerConfig, live: bool) -> Self {
        Self {
            app: None,
            window: None,
            config,
            live,
        }
    }
}

impl ApplicationHandler for ScrubberApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Scrubber")
            .with_inner_size(winit::dpi::LogicalSize::new(960, 600))
            .with_min_inner_size(winit::dpi::LogicalSize::new(320, 200));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window.clone());

        match App::new(window, &self.config, self.live) {
            Ok(app) => {
                self.app = Some(app);
                log::info!("Scrubber initialized");
            }
            Err(e) => {
                log::error!("Failed to initialize app: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(app) = self.app.as_mut() else {
            return;
        };

        app.egui_overlay.handle_event(&app.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                app.quit_requested = true;
            }
            WindowEvent::Resized(size) => {
                app.resize(size.width, size.height);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = app.window.inner_size();
                app.resize(size.width, size.height);
            }
            // Esc leaves fullscreen first, quits otherwise.
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if app.window.fullscreen().is_some() {
                    app.window.set_fullscreen(None);
                } else {
                    app.quit_requested = true;
                }
            }
            WindowEvent::RedrawRequested => {
                app.update();
                app.run_ui();

                match app.render() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app.gpu.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory");
                        event_loop.exit();
                    }
                    Err(e) => {
                        log::warn!("Surface error: {e}");
                    }
                }

                app.window.request_redraw();
            }
            _ => {}
        }

        if app.quit_requested {
            log::info!("Quit requested");
            event_loop.exit();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config = PlayerConfig::load(args.config.as_deref());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(winit::event_loop::ControlFlow::Poll);

    let mut app = ScrubberApp::new(config, args.live);
    event_loop.run_app(&mut app)?;

    Ok(())
}
