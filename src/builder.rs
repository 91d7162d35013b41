use crate::{Color, Direction, Error, Player};

/// A builder to help create customized players.
#[derive(Debug, Clone)]
pub struct PlayerBuilder {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color,
    speed: f32,
    jump_strength: f32,
}

impl PlayerBuilder {
    /// Create a builder that can be finalized into a [`Player`].
    ///
    /// The player starts at the origin, walks 5 pixels per step and jumps with an initial upward
    /// velocity of 10 pixels per step.
    ///
    /// # Examples
    ///
    /// ```
    /// use jumper::{Color, PlayerBuilder};
    ///
    /// let player = PlayerBuilder::new(16.0, 24.0)
    ///     .position(100.0, 216.0)
    ///     .color(Color::rgb(0xe8, 0x48, 0x5e))
    ///     .speed(3.0)
    ///     .jump_strength(12.0)
    ///     .build()?;
    ///
    /// assert_eq!(player.jump_strength(), 12.0);
    /// # Ok::<(), jumper::Error>(())
    /// ```
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            color: Color::default(),
            speed: 5.0,
            jump_strength: 10.0,
        }
    }

    /// Set the initial top-left corner.
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the fill color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the horizontal distance covered by one movement step.
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the upward velocity a jump starts with.
    pub fn jump_strength(mut self, jump_strength: f32) -> Self {
        self.jump_strength = jump_strength;
        self
    }

    /// Create a player from the builder.
    ///
    /// # Errors
    ///
    /// Returns an error when a coordinate, the speed or the jump strength is not finite, when the
    /// width or height is not a positive finite number, or when the speed or jump strength is
    /// negative.
    pub fn build(self) -> Result<Player, Error> {
        let valid_extent = |n: f32| n.is_finite() && n > 0.0;
        if !valid_extent(self.width) || !valid_extent(self.height) {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        for (name, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() {
                return Err(Error::NonFinite(name));
            }
        }

        for (name, value) in [("speed", self.speed), ("jump_strength", self.jump_strength)] {
            if !value.is_finite() {
                return Err(Error::NonFinite(name));
            }
            if value < 0.0 {
                return Err(Error::Negative(name));
            }
        }

        Ok(Player {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            color: self.color,
            speed: self.speed,
            direction: Direction::None,
            velocity_y: 0.0,
            is_jumping: false,
            jump_strength: self.jump_strength,
        })
    }
}
