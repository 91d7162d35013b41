/// The player can only move left or right, but can also be stationary.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    /// Do not move the player.
    #[default]
    None,
    /// Move to the left.
    Left,
    /// Move to the right.
    Right,
}

/// A decoded keyboard key.
///
/// Only the arrow keys mean anything to the player. Everything else collapses into
/// [`Key::Other`] and is ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    /// Walk left.
    ArrowLeft,
    /// Walk right.
    ArrowRight,
    /// Jump.
    ArrowUp,
    /// Any unrecognized key.
    Other,
}

/// Maps DOM `KeyboardEvent.key` names.
impl From<&str> for Key {
    fn from(name: &str) -> Key {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            _ => Key::Other,
        }
    }
}
