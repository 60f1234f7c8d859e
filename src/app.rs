//! Native window shell
//!
//! Owns the window, GPU state and frame clock, and drives `Game` once per
//! redraw: input, update, render, then pace to the target frame rate.

use std::sync::Arc;

use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::consts::{HEIGHT, WIDTH};
use crate::game::Game;
use crate::highscores::HighScoreFile;
use crate::platform::{FrameClock, InputState};
use crate::renderer::{Background, RenderError, RenderState, VertexCanvas, scene};
use crate::settings::Settings;

const WINDOW_TITLE: &str = "Obstacle Avoidance Game";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub struct App {
    settings: Settings,
    game: Game<HighScoreFile>,
    background: Option<Background>,
    input: InputState,
    clock: FrameClock,
    canvas: VertexCanvas,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    /// Fatal start-up error, reported once the event loop returns
    error: Option<AppError>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let store = HighScoreFile::new(settings.high_score_path.clone());
        let background = Background::load(&settings.background_image);
        let clock = FrameClock::new(settings.target_fps);
        log::info!("Pacing frames at {:?}", clock.frame_duration());

        Self {
            game: Game::new(store, seed),
            background,
            input: InputState::new(),
            clock,
            canvas: VertexCanvas::new(),
            window: None,
            renderer: None,
            error: None,
            settings,
        }
    }

    /// Open the window and run until quit
    pub fn run(settings: Settings) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(settings);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        // Game::frame splits dt into fixed simulation ticks
        let dt = self.clock.begin_frame();
        let input = self.input.take_frame();
        self.game.frame(&input, dt);

        if !self.game.is_running() {
            event_loop.exit();
            return;
        }

        let fps = self.settings.show_fps.then(|| self.clock.fps());
        scene::draw(&mut self.canvas, &self.game, self.background.as_ref(), fps);

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&self.canvas) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        self.clock.wait_for_next_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        match pollster::block_on(RenderState::new(window.clone())) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => return self.fail(event_loop, e.into()),
        }

        log::info!("Window ready");
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.input.on_close_requested();
                self.game.frame(&self.input.take_frame(), 0.0);
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input
                        .on_key(code, event.state == ElementState::Pressed, event.repeat);
                }
            }
            WindowEvent::Focused(false) => self.input.on_focus_lost(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
