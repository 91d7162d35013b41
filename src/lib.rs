//! A tiny platformer player entity.
//!
//! [`Player`] is a rectangle with a position, a size and a color that walks left and right, jumps,
//! falls under gravity and tests itself for collisions against other axis-aligned rectangles. It
//! is deliberately small: there is no game loop, no level and no renderer here. The owner of the
//! player drives it once per frame and forwards keyboard events to it.
//!
//! The usual owner is a [`Controller`], which pairs the player with the world parameters it
//! falls through ([`Physics`]) and gives the input wiring an explicit beginning and end.
//!
//! Drawing goes through the [`Surface`] trait. [`Frame`] implements it for an RGBA8 pixel buffer,
//! such as the one handed out by [`pixels`](https://crates.io/crates/pixels).
//!
//! # Example
//!
//! ```
//! use jumper::{Controller, Key, Physics, PlayerBuilder};
//!
//! let player = PlayerBuilder::new(32.0, 32.0)
//!     .position(0.0, 208.0)
//!     .speed(2.0)
//!     .jump_strength(8.0)
//!     .build()?;
//! let mut controller = Controller::new(player, Physics::new(240.0, 0.5));
//!
//! controller.key_down(Key::ArrowRight);
//! controller.update();
//! assert_eq!(controller.player().x(), 2.0);
//! # Ok::<(), jumper::Error>(())
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub use crate::builder::PlayerBuilder;
pub use crate::color::Color;
pub use crate::controller::{Controller, Physics};
pub use crate::controls::{Direction, Key};
pub use crate::geo::{Bounds, Rect};
pub use crate::player::{Player, VerticalState};
pub use crate::surface::{Frame, Surface};
use thiserror::Error;

mod builder;
mod color;
mod controller;
mod controls;
mod geo;
mod player;
mod surface;

/// All the ways in which building a player or a frame can fail.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// The player box must have a positive, finite width and height.
    #[error("Invalid player dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    /// A numeric field was NaN or infinite.
    #[error("The value of `{0}` is not a finite number")]
    NonFinite(&'static str),
    /// A magnitude was negative.
    #[error("The value of `{0}` must not be negative")]
    Negative(&'static str),
    /// The color string could not be parsed.
    #[error("Unrecognized color: `{0}`")]
    InvalidColor(String),
    /// The pixel buffer does not match the frame dimensions.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
