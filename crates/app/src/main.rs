//! Dynamic Lighters - Main Entry Point
//!
//! Opens a window over the lighters stage. Click a lighter to swing its cap
//! open and play its sound, click again to close it. Drag to orbit, scroll
//! to zoom, Escape to quit.
//!
//! An optional first argument names a TOML config file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use lighter_core::{AppConfig, Timer};
use lighter_platform::{InputState, KeyCode, MouseButton, Window, pointer_to_ndc};
use lighter_stage::Stage;

/// Pixels per line for pixel-based scroll deltas.
const PIXELS_PER_LINE: f64 = 40.0;

struct App {
    config: AppConfig,
    window: Option<Window>,
    stage: Stage,
    input: InputState,
    timer: Timer,
}

impl App {
    fn new(config: AppConfig) -> Result<Self> {
        let mut stage = Stage::from_config(&config).context("failed to build the stage")?;
        stage.load_audio();
        Ok(Self {
            config,
            window: None,
            stage,
            input: InputState::new(),
            timer: Timer::new(),
        })
    }

    fn handle_input(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let (dx, dy) = self.input.drag_delta();
        if dx != 0.0 || dy != 0.0 {
            self.stage.orbit(dx, dy);
        }

        let scroll = self.input.scroll_delta();
        if scroll != 0.0 {
            self.stage.zoom(scroll);
        }

        if let Some((x, y)) = self.input.take_click() {
            let ndc = pointer_to_ndc(x, y, window.width(), window.height());
            if let Some(outcome) = self.stage.click(ndc) {
                let hinge = &self.stage.toggles().hinges()[outcome.hinge];
                info!("'{}' is now {:?}", hinge.hit_name(), outcome.state);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let settings = &self.config.window;
            match Window::new(event_loop, settings.width, settings.height, &settings.title) {
                Ok(window) => {
                    info!("Initialization complete, entering main loop");
                    self.stage.resize(window.width(), window.height());
                    self.window = Some(window);
                }
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                info!("Window resized to {}x{}", size.width, size.height);
                if let Some(ref mut window) = self.window {
                    window.resize(size.width, size.height);
                }
                self.stage.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.timer.tick();
                self.handle_input();

                let frame = self.stage.frame();
                self.input.begin_frame();
                if frame.index % 600 == 0 {
                    debug!(
                        "Frame {}: {} draw items, {:.1} fps",
                        frame.index,
                        frame.items.len(),
                        self.timer.average_fps()
                    );
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from(button);
                if !matches!(button, MouseButton::Left | MouseButton::Right | MouseButton::Middle) {
                    return;
                }
                match state {
                    ElementState::Pressed => self.input.on_mouse_pressed(button),
                    ElementState::Released => self.input.on_mouse_released(button),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(y),
                    MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_LINE,
                };
                self.input.on_scroll(lines);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state.is_pressed() {
                        self.input.on_key_pressed(key);
                    } else {
                        self.input.on_key_released(key);
                    }
                }
                if self.input.is_key_just_pressed(KeyCode::Escape) {
                    info!("Escape pressed, shutting down");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn load_config() -> Result<AppConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("failed to load config '{}'", path.display())),
        None => Ok(AppConfig::default()),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    lighter_core::init_logging();
    info!("Starting Dynamic Lighters");

    let config = load_config()?;

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create app and run
    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
