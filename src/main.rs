//! stadium-view: night-time stadium illustration
//!
//! A GPU-rendered window showing a stylized stadium from three fixed
//! perspectives. `F`, `L` and `R` (or the header buttons) switch between the
//! front, left and right stands; a header button opens a decorative
//! "view source" overlay.
//!
//! Uses vello/wgpu for rendering and winit for the window and input.

mod chrome;
mod info_panel;
mod input;
mod logging;
mod settings;
mod stadium;
mod state_machine;
mod surface;
mod text;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{debug, error, info};
use vello::kurbo::{Affine, Point};
use vello::peniko::color::palette;
use vello::util::{RenderContext, RenderSurface};
use vello::{Renderer, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Fullscreen, Window};

use vello::wgpu;

use chrome::CanvasFit;
use info_panel::InfoPanel;
use input::InputDispatcher;
use settings::{Overrides, ResolvedConfig, Settings};
use surface::SceneSurface;
use text::Fonts;

const WINDOW_TITLE: &str = "Elite Stadium V43 - Pitch Focus";

/// Night-time stadium illustration with front and side perspectives
#[derive(Parser, Debug)]
#[command(name = "stadium-view", version, about)]
struct Args {
    /// Open a window instead of going fullscreen
    #[arg(short, long)]
    windowed: bool,

    /// Draw seats as plain rectangles instead of rounded ones
    #[arg(long)]
    plain_seats: bool,

    /// Start with the source overlay open
    #[arg(long)]
    show_source: bool,

    /// Settings file (defaults to ~/.config/stadium-view/settings.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug)]
enum RenderState {
    Active {
        surface: Box<RenderSurface<'static>>,
        valid_surface: bool,
        window: Arc<Window>,
    },
    Suspended(Option<Arc<Window>>),
}

struct App {
    context: RenderContext,
    renderers: Vec<Option<Renderer>>,
    state: RenderState,
    scene: Scene,
    config: ResolvedConfig,
    fonts: Fonts,
    dispatcher: InputDispatcher,
    panel: InfoPanel,
    /// Last cursor position in physical pixels.
    cursor: Option<Point>,
    /// Set when window or GPU setup fails; returned from `main`.
    fatal: Option<anyhow::Error>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let RenderState::Suspended(cached_window) = &mut self.state else {
            return;
        };

        let window = match cached_window.take() {
            Some(window) => Ok(window),
            None => create_window(event_loop, self.config.windowed),
        };
        if let Err(e) = window.and_then(|window| self.activate(window)) {
            error!("{e:#}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let RenderState::Active { window, .. } = &self.state {
            self.state = RenderState::Suspended(Some(window.clone()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let window = match &self.state {
            RenderState::Active { window, .. } if window.id() == window_id => window.clone(),
            _ => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if self.dispatcher.press(&logical_key, &mut self.panel) {
                    window.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(Point::new(position.x, position.y));
            }

            WindowEvent::CursorLeft { .. } => self.cursor = None,

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let Some(cursor) = self.cursor else {
                    return;
                };
                let scale = window.scale_factor();
                let width = window.inner_size().width as f64 / scale;
                let pos = Point::new(cursor.x / scale, cursor.y / scale);
                let Some(command) = chrome::hit_test(width, pos, &self.panel) else {
                    return;
                };
                if self.dispatcher.apply(command, &mut self.panel) {
                    window.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } if self.panel.is_shown() => {
                let scale = window.scale_factor();
                let height = window.inner_size().height as f64 / scale;
                if self.panel.scroll_by(input::wheel_lines(delta, scale), height) {
                    window.request_redraw();
                }
            }

            WindowEvent::Resized(size) => {
                if let RenderState::Active {
                    surface,
                    valid_surface,
                    ..
                } = &mut self.state
                {
                    if size.width != 0 && size.height != 0 {
                        self.context
                            .resize_surface(surface, size.width, size.height);
                        *valid_surface = true;
                    } else {
                        *valid_surface = false;
                    }
                }
                window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => window.request_redraw(),

            WindowEvent::RedrawRequested => {
                let (width, height) = match &self.state {
                    RenderState::Active {
                        surface,
                        valid_surface: true,
                        ..
                    } => (surface.config.width, surface.config.height),
                    // Not mounted yet: skip; the next resize or input redraws.
                    _ => return,
                };

                self.encode_frame(width, height, window.scale_factor());
                if let Err(e) = self.present() {
                    debug!(target: "render", "frame skipped: {e:#}");
                }
            }

            _ => {}
        }
    }
}

impl App {
    fn new(config: ResolvedConfig, fonts: Fonts) -> Self {
        let mut panel = InfoPanel::default();
        if config.show_source {
            panel.show();
        }
        Self {
            context: RenderContext::new(),
            renderers: vec![],
            state: RenderState::Suspended(None),
            scene: Scene::new(),
            config,
            fonts,
            dispatcher: InputDispatcher::new(),
            panel,
            cursor: None,
            fatal: None,
        }
    }

    /// Create the render surface (and renderer, once per device) for `window`.
    fn activate(&mut self, window: Arc<Window>) -> Result<()> {
        let size = window.inner_size();
        let surface = pollster::block_on(self.context.create_surface(
            window.clone(),
            size.width,
            size.height,
            wgpu::PresentMode::AutoVsync,
        ))
        .map_err(|e| anyhow!("failed to create render surface: {e:?}"))?;

        self.renderers
            .resize_with(self.context.devices.len(), || None);
        if self.renderers[surface.dev_id].is_none() {
            self.renderers[surface.dev_id] = Some(create_renderer(&self.context, &surface)?);
        }

        info!(target: "render", width = size.width, height = size.height, "surface ready");
        window.request_redraw();
        self.state = RenderState::Active {
            surface: Box::new(surface),
            valid_surface: size.width != 0 && size.height != 0,
            window,
        };
        Ok(())
    }

    /// Rebuild the scene: canvas, letterbox, header, then the overlay on top.
    fn encode_frame(&mut self, width: u32, height: u32, scale_factor: f64) {
        self.scene.reset();

        let w = width as f64 / scale_factor;
        let h = height as f64 / scale_factor;
        let base = Affine::scale(scale_factor);
        let fit = CanvasFit::new(w, h);
        let view = self.dispatcher.view();

        {
            let mut canvas = (!fit.is_empty()).then(|| {
                SceneSurface::new(&mut self.scene, &self.fonts)
                    .with_transform(base * fit.transform())
            });
            stadium::render(canvas.as_mut(), view, self.config.caps);
        }

        let mut window_surface = SceneSurface::new(&mut self.scene, &self.fonts).with_transform(base);
        chrome::render_letterbox(&mut window_surface, w, h, &fit);
        chrome::render_chrome(&mut window_surface, w, h, view, &self.panel);
        if self.panel.is_shown() {
            info_panel::render_overlay(&mut window_surface, w, h, &self.panel);
        }
    }

    /// Render the encoded scene to the window.
    fn present(&mut self) -> Result<()> {
        let RenderState::Active { surface, .. } = &mut self.state else {
            return Ok(());
        };

        let device_handle = &self.context.devices[surface.dev_id];
        let renderer = self
            .renderers
            .get_mut(surface.dev_id)
            .and_then(Option::as_mut)
            .context("no renderer for surface device")?;

        renderer
            .render_to_texture(
                &device_handle.device,
                &device_handle.queue,
                &self.scene,
                &surface.target_view,
                &vello::RenderParams {
                    base_color: palette::css::BLACK,
                    width: surface.config.width,
                    height: surface.config.height,
                    antialiasing_method: self.config.antialiasing.aa_config(),
                },
            )
            .map_err(|e| anyhow!("failed to render scene: {e:?}"))?;

        let surface_texture = surface
            .surface
            .get_current_texture()
            .context("failed to get surface texture")?;

        let mut encoder =
            device_handle
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Surface Blit"),
                });
        surface.blitter.copy(
            &device_handle.device,
            &mut encoder,
            &surface.target_view,
            &surface_texture
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default()),
        );
        device_handle.queue.submit([encoder.finish()]);
        surface_texture.present();
        device_handle
            .device
            .poll(wgpu::PollType::Poll)
            .map_err(|e| anyhow!("device poll failed: {e:?}"))?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init();

    info!("stadium-view v{}", env!("CARGO_PKG_VERSION"));

    let settings_path = args.config.clone().or_else(settings::default_path);
    let settings = Settings::load_or_default(settings_path.as_deref());
    let config = ResolvedConfig::resolve(
        &settings,
        Overrides {
            windowed: args.windowed,
            plain_seats: args.plain_seats,
            show_source: args.show_source,
        },
    );
    debug!(?config, "resolved configuration");

    let fonts = Fonts::load();
    if fonts.readable.is_none() && fonts.mono.is_none() {
        info!("no system font found; text uses the bitmap fallback");
    }

    let mut app = App::new(config, fonts);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn create_window(event_loop: &ActiveEventLoop, windowed: bool) -> Result<Arc<Window>> {
    let mut attr = Window::default_attributes().with_title(WINDOW_TITLE);

    if windowed {
        attr = attr.with_inner_size(winit::dpi::LogicalSize::new(
            stadium::CANVAS_WIDTH,
            stadium::CANVAS_HEIGHT + chrome::HEADER_HEIGHT,
        ));
    } else {
        attr = attr.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    let window = event_loop
        .create_window(attr)
        .context("failed to create window")?;
    Ok(Arc::new(window))
}

fn create_renderer(render_cx: &RenderContext, surface: &RenderSurface<'_>) -> Result<Renderer> {
    Renderer::new(
        &render_cx.devices[surface.dev_id].device,
        RendererOptions::default(),
    )
    .map_err(|e| anyhow!("failed to create renderer: {e:?}"))
}
