use crate::{Bounds, Color, Direction, Error, Key, PlayerBuilder, Rect, Surface};
use log::{debug, trace};

/// Where the player is in its jump.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VerticalState {
    /// Standing on the ground plane; free to jump.
    Grounded,
    /// Moving upward after a jump.
    Ascending,
    /// Coming back down after a jump.
    Falling,
}

/// The player entity.
///
/// A colored box that walks left and right, jumps and falls. The owner drives it once per frame
/// with [`Player::advance`] and [`Player::apply_gravity`], and forwards key events to
/// [`Player::on_key_down`] and [`Player::on_key_up`].
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) color: Color,
    pub(crate) speed: f32,
    pub(crate) direction: Direction,
    pub(crate) velocity_y: f32,
    pub(crate) is_jumping: bool,
    pub(crate) jump_strength: f32,
}

impl Player {
    /// Create a standing player.
    ///
    /// See [`PlayerBuilder`] for a builder with defaults.
    ///
    /// # Errors
    ///
    /// Fails with the same conditions as [`PlayerBuilder::build`].
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        speed: f32,
        jump_strength: f32,
    ) -> Result<Player, Error> {
        PlayerBuilder::new(width, height)
            .position(x, y)
            .color(color)
            .speed(speed)
            .jump_strength(jump_strength)
            .build()
    }

    /// Draw the player as a solid rectangle.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.bounds(), self.color);
    }

    /// Test whether the player overlaps another box.
    ///
    /// Boxes which only share an edge or a corner do not collide.
    pub fn check_collision<B: Bounds + ?Sized>(&self, other: &B) -> bool {
        self.bounds().intersects(&other.rect())
    }

    /// Start walking right.
    pub fn move_right(&mut self) {
        self.direction = Direction::Right;
    }

    /// Start walking left.
    pub fn move_left(&mut self) {
        self.direction = Direction::Left;
    }

    /// Stop walking.
    pub fn stop_moving(&mut self) {
        self.direction = Direction::None;
    }

    /// Apply one step of horizontal movement in the current direction.
    ///
    /// There is no wall on the right. The left wall only stops the player from starting a step at
    /// or beyond `x == 0`, so a step may still carry it past the wall.
    pub fn advance(&mut self) {
        match self.direction {
            Direction::Right => self.x += self.speed,
            Direction::Left if self.x > 0.0 => self.x -= self.speed,
            Direction::Left | Direction::None => (),
        }
    }

    /// Jump, unless already in the air from a previous jump.
    pub fn jump(&mut self) {
        if !self.is_jumping {
            self.velocity_y = -self.jump_strength;
            self.is_jumping = true;
            debug!("Jump from y={} with velocity {}", self.y, self.velocity_y);
        }
    }

    /// Integrate one step of gravity.
    ///
    /// While the player is above the ground plane or still moving upward, `gravity` is added to
    /// the vertical velocity and the velocity to the position. Otherwise the player lands: it is
    /// snapped onto the ground plane at `ground_height` with zero velocity and may jump again.
    pub fn apply_gravity(&mut self, ground_height: f32, gravity: f32) {
        let floor = ground_height - self.height;

        if self.y < floor || self.velocity_y < 0.0 {
            self.velocity_y += gravity;
            self.y += self.velocity_y;
        } else {
            if self.is_jumping {
                debug!("Landed at y={floor}");
            }
            self.y = floor;
            self.velocity_y = 0.0;
            self.is_jumping = false;
        }
    }

    /// React to a key being pressed.
    pub fn on_key_down(&mut self, key: Key) {
        match key {
            Key::ArrowRight => self.move_right(),
            Key::ArrowLeft => self.move_left(),
            Key::ArrowUp => self.jump(),
            Key::Other => trace!("Ignoring key down: {key:?}"),
        }
    }

    /// React to a key being released.
    ///
    /// Releasing an arrow only stops the player when it matches the current direction. With both
    /// arrows held, releasing the one that was overridden has no effect.
    pub fn on_key_up(&mut self, key: Key) {
        match (key, self.direction) {
            (Key::ArrowRight, Direction::Right) | (Key::ArrowLeft, Direction::Left) => {
                self.stop_moving()
            }
            _ => trace!("Ignoring key up: {key:?}"),
        }
    }

    /// Teleport the top-left corner. Velocity and jump state are kept.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// The player's bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Report the vertical state.
    ///
    /// This follows the jump: a player that was placed in the air without jumping still reports
    /// [`VerticalState::Grounded`] while it falls.
    pub fn state(&self) -> VerticalState {
        if !self.is_jumping {
            VerticalState::Grounded
        } else if self.velocity_y < 0.0 {
            VerticalState::Ascending
        } else {
            VerticalState::Falling
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Vertical velocity; negative values point up.
    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn jump_strength(&self) -> f32 {
        self.jump_strength
    }
}

impl Bounds for Player {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}
