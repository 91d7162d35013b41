#![deny(clippy::all)]
#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use jumper::{Color, Controller, Frame, Key, Physics, PlayerBuilder, Rect, Surface as _};
use log::{debug, error, info};
use pixels::{Error, Pixels, SurfaceTexture};
use std::env;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const GRAVITY: f32 = 0.5;

/// The world is stepped at 60 Hz no matter how often the event loop wakes up.
const TIME_STEP: Duration = Duration::from_nanos(1_000_000_000 / 60);
/// Catch-up limit after a stall, e.g. while the window is being dragged.
const MAX_STEPS: u32 = 5;

const SKY: Color = Color::rgb(0x48, 0xb2, 0xe8);
const OBSTACLE: Color = Color::rgb(0x3a, 0x3a, 0x3a);
const OUTLINE: Color = Color::rgb(0xff, 0xff, 0xff);
const HIT: Color = Color::rgb(0xff, 0xff, 0x00);

/// Everything that changes between frames.
struct World {
    controller: Controller,
    obstacle: Rect,
    colliding: bool,
    debug: bool,
}

impl World {
    fn new(debug: bool) -> Result<Self, jumper::Error> {
        let player = PlayerBuilder::new(16.0, 24.0)
            .position(24.0, HEIGHT as f32 - 24.0)
            .color(Color::rgb(0x5e, 0x48, 0xe8))
            .speed(2.0)
            .jump_strength(8.0)
            .build()?;

        Ok(Self {
            controller: Controller::new(player, Physics::new(HEIGHT as f32, GRAVITY)),
            obstacle: Rect::new(180.0, HEIGHT as f32 - 40.0, 32.0, 40.0),
            colliding: false,
            debug,
        })
    }

    fn update(&mut self) {
        self.controller.update();

        let colliding = self.controller.player().check_collision(&self.obstacle);
        if colliding != self.colliding && self.debug {
            debug!(
                "Obstacle collision {}: {:?}",
                if colliding { "started" } else { "ended" },
                self.controller.player().bounds(),
            );
        }
        self.colliding = colliding;
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        frame.clear(SKY);
        frame.fill_rect(self.obstacle, OBSTACLE);
        self.controller.draw(frame);

        if self.debug {
            let color = if self.colliding { HIT } else { OUTLINE };
            let Rect {
                x,
                y,
                width,
                height,
            } = self.obstacle;
            frame.fill_rect(Rect::new(x - 1.0, y - 1.0, width + 2.0, 1.0), color);
            frame.fill_rect(Rect::new(x - 1.0, y + height, width + 2.0, 1.0), color);
            frame.fill_rect(Rect::new(x - 1.0, y, 1.0, height), color);
            frame.fill_rect(Rect::new(x + width, y, 1.0, height), color);
        }
    }
}

/// Converts wall-clock time between event loop passes into a number of fixed world steps.
#[derive(Debug, Default)]
struct FixedStep {
    accumulator: Duration,
}

impl FixedStep {
    fn steps(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= TIME_STEP && steps < MAX_STEPS {
            self.accumulator -= TIME_STEP;
            steps += 1;
        }
        if self.accumulator >= TIME_STEP {
            debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        steps
    }
}

fn decode(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ArrowUp => Key::ArrowUp,
        _ => Key::Other,
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

struct App {
    window: Option<&'static Window>, // leaked &'static Window
    pixels: Option<Pixels<'static>>, // borrows the window
    world: World,
    stepper: FixedStep,
    last_pass: Option<Instant>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, elwt: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let size = LogicalSize::new(WIDTH as f64, HEIGHT as f64);
        let scaled_size = LogicalSize::new(WIDTH as f64 * 3.0, HEIGHT as f64 * 3.0);
        let attrs = WindowAttributes::default()
            .with_title("jumper")
            .with_inner_size(scaled_size)
            .with_min_inner_size(size);
        let window = match elwt.create_window(attrs) {
            Ok(window) => window,
            Err(err) => {
                log_error("create_window", err);
                elwt.exit();
                return;
            }
        };

        // Leak to get &'static Window so Pixels can live in the struct
        let window: &'static Window = Box::leak(Box::new(window));
        let win_size = window.inner_size();

        let surface = SurfaceTexture::new(win_size.width, win_size.height, window);
        match Pixels::new(WIDTH, HEIGHT, surface) {
            Ok(pixels) => {
                self.window = Some(window);
                self.pixels = Some(pixels);
            }
            Err(err) => {
                log_error("Pixels::new", err);
                elwt.exit();
            }
        }
    }

    fn window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window else { return };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => self.world.controller.key_down(decode(code)),
                ElementState::Released => self.world.controller.key_up(decode(code)),
            },
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        log_error("pixels.resize_surface", err);
                        elwt.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(pixels) = self.pixels.as_mut() {
                    match Frame::new(pixels.frame_mut(), WIDTH, HEIGHT) {
                        Ok(mut frame) => self.world.draw(&mut frame),
                        Err(err) => {
                            log_error("Frame::new", err);
                            elwt.exit();
                            return;
                        }
                    }
                    if let Err(err) = pixels.render() {
                        log_error("pixels.render", err);
                        elwt.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _elwt: &ActiveEventLoop) {
        if let Some(window) = self.window {
            let now = Instant::now();
            let elapsed = self.last_pass.map_or(Duration::ZERO, |last| now.duration_since(last));
            self.last_pass = Some(now);

            for _ in 0..self.stepper.steps(elapsed) {
                self.world.update();
            }
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _elwt: &ActiveEventLoop) {
        self.world.controller.detach();
        info!("Final position: {:?}", self.world.controller.player().bounds());
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    // Enable debug mode with `DEBUG=true` environment variable
    let debug = env::var("DEBUG")
        .unwrap_or_else(|_| "false".to_string())
        .parse()
        .unwrap_or(false);

    let world = World::new(debug).map_err(|e| Error::UserDefined(Box::new(e)))?;
    let mut app = App {
        window: None,
        pixels: None,
        world,
        stepper: FixedStep::default(),
        last_pass: None,
    };

    let event_loop = EventLoop::new().map_err(|e| Error::UserDefined(Box::new(e)))?;
    let res = event_loop.run_app(&mut app);
    res.map_err(|e| Error::UserDefined(Box::new(e)))
}
