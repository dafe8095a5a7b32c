// Window module - display window and frame presentation
//
// Creates the scaled window, runs the emulator one frame per redraw, and
// blits the ARGB frame buffer to the pixels surface.

use crate::emulator::Emulator;
use crate::input::keyboard::{KeyboardHandler, Player};
use crate::ppu::palette::argb_to_rgba;
use crate::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Window configuration
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Scale factor (1x-8x)
    pub scale: u32,
    /// Target frame rate in Hz (60 for NTSC)
    pub target_fps: u32,
    /// Whether to enable VSync
    pub vsync: bool,
}

impl WindowConfig {
    /// Default configuration: 3x scale, 60 FPS, VSync on
    pub fn new() -> Self {
        Self {
            scale: 3,
            target_fps: 60,
            vsync: true,
        }
    }

    /// Set the scale factor (clamped to 1-8)
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8);
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Set VSync on or off
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Window width in pixels
    pub fn window_width(&self) -> u32 {
        SCREEN_WIDTH as u32 * self.scale
    }

    /// Window height in pixels
    pub fn window_height(&self) -> u32 {
        SCREEN_HEIGHT as u32 * self.scale
    }

    /// Frame duration for the target FPS
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps as u64)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Display window driving the emulator
pub struct DisplayWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    emulator: Emulator,
    last_frame_time: Instant,
    keyboard_handler: KeyboardHandler,
}

impl DisplayWindow {
    /// Create a new display window around an emulator
    ///
    /// The window itself is created when the event loop starts.
    pub fn new(config: WindowConfig, emulator: Emulator) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            emulator,
            last_frame_time: Instant::now(),
            keyboard_handler: KeyboardHandler::new(),
        }
    }

    /// Feed the current keyboard state into both controllers
    fn update_controllers(&mut self) {
        let player1 = self.keyboard_handler.controller_state(Player::One);
        let player2 = self.keyboard_handler.controller_state(Player::Two);

        self.emulator.bus_mut().controllers_mut().set_controller(0, player1);
        self.emulator.bus_mut().controllers_mut().set_controller(1, player2);
    }

    /// Run one emulated frame and blit it to the surface
    fn render(&mut self) -> Result<(), pixels::Error> {
        if let Err(fault) = self.emulator.run_one_frame() {
            log::error!("emulation fault: {}", fault);
        }

        if let Some(pixels) = &mut self.pixels {
            let surface = pixels.frame_mut();
            for (pixel, chunk) in self
                .emulator
                .frame()
                .iter()
                .zip(surface.chunks_exact_mut(4))
            {
                chunk.copy_from_slice(&argb_to_rgba(*pixel));
            }

            pixels.render()?;
        }
        Ok(())
    }

    /// Whether enough time has passed for the next frame
    fn should_render_frame(&mut self) -> bool {
        let elapsed = self.last_frame_time.elapsed();
        if elapsed >= self.config.frame_duration() {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }
}

impl ApplicationHandler for DisplayWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("nescore")
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");

        let window = Arc::new(window);
        let window_size = window.inner_size();

        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());

        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface_texture)
            .expect("Failed to create pixel buffer");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        self.keyboard_handler.handle_key_press(physical_key);
                    }
                    ElementState::Released => {
                        self.keyboard_handler.handle_key_release(physical_key);
                    }
                }
                self.update_controllers();
            }
            WindowEvent::RedrawRequested => {
                if self.should_render_frame() {
                    if let Err(err) = self.render() {
                        log::error!("render error: {}", err);
                        event_loop.exit();
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create and run the display window around an emulator
///
/// # Errors
/// Propagates event loop creation and run failures.
pub fn run_display(
    config: WindowConfig,
    emulator: Emulator,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    if config.vsync {
        event_loop.set_control_flow(ControlFlow::Wait);
    } else {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    let mut display = DisplayWindow::new(config, emulator);

    log::info!(
        "display: {}x{} window ({}x scale), {} FPS target, vsync {}",
        config.window_width(),
        config.window_height(),
        config.scale,
        config.target_fps,
        if config.vsync { "on" } else { "off" },
    );

    event_loop.run_app(&mut display)?;

    Ok(())
}
