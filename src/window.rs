//! SDL2 host glue: the window, event polling and frame pacing.
//!
//! Nothing here knows about projection or faces. The host loop turns SDL
//! events into an [`InputState`], hands that to the session, and uploads the
//! finished color buffer with [`Window::present`].

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::camera::KeyState;

/// SDL reports most failures as plain strings; they are carried through
/// unchanged.
#[derive(Debug, thiserror::Error)]
#[error("SDL error: {0}")]
pub struct WindowError(String);

impl From<String> for WindowError {
    fn from(message: String) -> Self {
        WindowError(message)
    }
}

/// Why the host loop should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    WindowClosed,
    Escape,
    AltF4,
}

/// Everything the host loop learned from one round of event polling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub keys: KeyState,
    /// Relative pointer motion samples, oldest first.
    pub mouse_motions: Vec<(i32, i32)>,
    pub quit: Option<QuitReason>,
}

impl InputState {
    /// Forgets last frame's motion samples and quit request. Key state is
    /// overwritten by the next sample anyway.
    pub fn begin_frame(&mut self) {
        self.mouse_motions.clear();
        self.quit = None;
    }
}

/// Caps the frame rate and measures elapsed time between frames.
pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_ms: u64,
}

impl FrameLimiter {
    /// `fps == 0` disables the cap.
    pub fn new(window: &Window, fps: u32) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_ms: if fps == 0 { 0 } else { 1000 / fps as u64 },
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in
    /// seconds since the last call.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> f32 {
        let mut current_time = window.timer().ticks64();
        let mut delta_ms = current_time - self.previous_frame_time;

        if delta_ms < self.frame_target_ms {
            let time_to_wait = self.frame_target_ms - delta_ms;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_ms = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_ms as f32 / 1000.0
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before `texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    /// Opens a fixed-size, centered window and grabs the mouse in relative
    /// mode so motion keeps arriving at the window edge.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, WindowError> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        let mouse = sdl_context.mouse();
        mouse.show_cursor(false);
        mouse.set_relative_mouse_mode(true);

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // The texture field is declared first, so it is dropped first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        tracing::info!(width, height, "window opened");

        Ok(Self {
            canvas,
            texture,
            _texture_creator: texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains pending events into `input` and samples the movement keys.
    ///
    /// Key bindings: Q up, E down, W forward, S back, A left, D right.
    pub fn poll_input(&mut self, input: &mut InputState) {
        input.begin_frame();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => input.quit = Some(QuitReason::WindowClosed),
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => input.quit = Some(QuitReason::Escape),
                Event::KeyDown {
                    keycode: Some(Keycode::F4),
                    keymod,
                    ..
                } if keymod.intersects(Mod::LALTMOD | Mod::RALTMOD) => {
                    input.quit = Some(QuitReason::AltF4)
                }
                Event::MouseMotion { xrel, yrel, .. } => input.mouse_motions.push((xrel, yrel)),
                _ => {}
            }
        }

        let keyboard = self.event_pump.keyboard_state();
        input.keys = KeyState {
            up: keyboard.is_scancode_pressed(Scancode::Q),
            down: keyboard.is_scancode_pressed(Scancode::E),
            forward: keyboard.is_scancode_pressed(Scancode::W),
            backward: keyboard.is_scancode_pressed(Scancode::S),
            left: keyboard.is_scancode_pressed(Scancode::A),
            right: keyboard.is_scancode_pressed(Scancode::D),
        };
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), WindowError> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
