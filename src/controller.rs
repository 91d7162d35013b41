//! The owner side of the player: world parameters and input forwarding.

use crate::{Key, Player, Surface};
use log::debug;

/// World parameters the player falls through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Physics {
    /// The y coordinate of the ground plane, usually the height of the play area.
    pub ground_height: f32,
    /// Acceleration added to the vertical velocity on every update.
    pub gravity: f32,
}

impl Physics {
    /// Create world parameters.
    pub const fn new(ground_height: f32, gravity: f32) -> Physics {
        Physics {
            ground_height,
            gravity,
        }
    }
}

impl Default for Physics {
    fn default() -> Self {
        Physics::new(240.0, 0.5)
    }
}

/// Owns a [`Player`] and forwards input to it.
///
/// Input only reaches the player while the controller is attached. Each controller receives
/// exactly the events its owner hands it, so several players can share one keyboard without
/// stepping on each other.
#[derive(Debug)]
pub struct Controller {
    player: Player,
    physics: Physics,
    attached: bool,
}

impl Controller {
    /// Take ownership of a player. The controller starts attached.
    pub fn new(player: Player, physics: Physics) -> Controller {
        debug!("Controller attached: {physics:?}");

        Controller {
            player,
            physics,
            attached: true,
        }
    }

    /// Forward a key press.
    pub fn key_down(&mut self, key: Key) {
        if self.attached {
            self.player.on_key_down(key);
        }
    }

    /// Forward a key release.
    pub fn key_up(&mut self, key: Key) {
        if self.attached {
            self.player.on_key_up(key);
        }
    }

    /// Run one frame of movement and gravity.
    pub fn update(&mut self) {
        self.player.advance();
        self.player.apply_gravity(self.physics.ground_height, self.physics.gravity);
    }

    /// Draw the player.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.player.draw(surface);
    }

    /// Stop forwarding input to the player.
    ///
    /// The player keeps whatever direction it had; frames still move it.
    pub fn detach(&mut self) {
        if self.attached {
            debug!("Controller detached");
            self.attached = false;
        }
    }

    /// Resume forwarding input to the player.
    pub fn attach(&mut self) {
        if !self.attached {
            debug!("Controller attached: {:?}", self.physics);
            self.attached = true;
        }
    }

    /// Whether input reaches the player.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn physics(&self) -> Physics {
        self.physics
    }

    /// Replace the world parameters, e.g. to follow a resized play area.
    pub fn set_physics(&mut self, physics: Physics) {
        self.physics = physics;
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Detach and hand the player back.
    pub fn into_player(mut self) -> Player {
        self.detach();
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Direction, PlayerBuilder};

    fn controller() -> Controller {
        let player = PlayerBuilder::new(10.0, 20.0)
            .position(50.0, 80.0)
            .color(Color::rgb(1, 2, 3))
            .speed(4.0)
            .jump_strength(6.0)
            .build()
            .unwrap();
        Controller::new(player, Physics::new(100.0, 1.0))
    }

    #[test]
    fn update_moves_and_falls() {
        let mut c = controller();
        c.key_down(Key::ArrowLeft);
        c.update();
        assert_eq!(c.player().x(), 46.0);
        assert_eq!(c.player().y(), 80.0);
        assert!(!c.player().is_jumping());

        c.key_down(Key::ArrowUp);
        c.update();
        assert_eq!(c.player().x(), 42.0);
        assert_eq!(c.player().velocity_y(), -5.0);
        assert_eq!(c.player().y(), 75.0);
    }

    #[test]
    fn detached_ignores_input() {
        let mut c = controller();
        c.key_down(Key::ArrowRight);
        c.detach();
        assert!(!c.is_attached());

        c.key_up(Key::ArrowRight);
        c.key_down(Key::ArrowUp);
        assert_eq!(c.player().direction(), Direction::Right);
        assert!(!c.player().is_jumping());

        // Frames keep running
        c.update();
        assert_eq!(c.player().x(), 54.0);

        c.attach();
        c.key_up(Key::ArrowRight);
        assert_eq!(c.player().direction(), Direction::None);
    }

    #[test]
    fn independent_controllers() {
        let mut one = controller();
        let mut two = controller();

        one.key_down(Key::ArrowRight);
        assert_eq!(one.player().direction(), Direction::Right);
        assert_eq!(two.player().direction(), Direction::None);

        two.key_down(Key::ArrowUp);
        assert!(two.player().is_jumping());
        assert!(!one.player().is_jumping());
    }

    #[test]
    fn ground_follows_physics() {
        let mut c = controller();
        c.set_physics(Physics::new(50.0, 1.0));
        assert_eq!(c.physics().ground_height, 50.0);

        // Now below the ground plane, so the next frame snaps it up
        c.update();
        assert_eq!(c.player().y(), 30.0);
    }

    #[test]
    fn default_physics() {
        let physics = Physics::default();
        assert_eq!(physics, Physics::new(240.0, 0.5));

        // A default player dropped from the top settles on the default ground
        let player = PlayerBuilder::new(16.0, 16.0).build().unwrap();
        let mut c = Controller::new(player, physics);
        for _ in 0..100 {
            c.update();
        }
        assert_eq!(c.player().y(), 224.0);
        assert_eq!(c.player().velocity_y(), 0.0);
    }

    #[test]
    fn into_player() {
        let mut c = controller();
        c.player_mut().set_position(1.0, 2.0);
        let p = c.into_player();
        assert_eq!((p.x(), p.y()), (1.0, 2.0));
    }
}
