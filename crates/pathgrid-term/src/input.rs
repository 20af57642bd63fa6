//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use pathgrid::Point;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab,
    Backspace,
    /// A printable character, including `' '`.
    Char(char),
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Mouse moved with the primary button held.
    DragMain,
    /// Mouse moved with the secondary button held.
    DragSecondary,
    /// Button released.
    Release,
}

/// An input message delivered to the model.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// A key was pressed.
    Key(Key),
    /// A mouse event at a terminal cell.
    Mouse { action: MouseAction, pos: Point },
    /// The terminal was resized.
    Resize { width: i32, height: i32 },
    /// Sent once per loop iteration, after input polling times out or
    /// returns. Models use it to pull state from other threads.
    Tick,
    /// Sent once when the application starts.
    Init,
}

impl Msg {
    /// Convenience: a key press of character `c`.
    pub fn char(c: char) -> Self {
        Self::Key(Key::Char(c))
    }
}
