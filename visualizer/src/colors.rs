//! Cell palette.

use pathgrid::CellClass;
use pathgrid_term::Color;

pub const BACKGROUND: Color = Color::from_rgb(242, 236, 228);
pub const WALL: Color = Color::from_rgb(26, 32, 51);
pub const START: Color = Color::from_rgb(236, 64, 122);
pub const GOAL: Color = Color::from_rgb(255, 140, 0);
pub const OPEN: Color = Color::from_rgb(254, 104, 88);
pub const CLOSED: Color = Color::from_rgb(121, 236, 135);
pub const PATH: Color = Color::from_rgb(38, 97, 255);
pub const PATH_TRICKLE: Color = Color::from_rgb(34, 216, 248);

/// Status and help text.
pub const TEXT: Color = Color::from_rgb(220, 220, 220);
pub const TEXT_DIM: Color = Color::from_rgb(130, 130, 140);
pub const MESSAGE: Color = Color::from_rgb(255, 200, 90);

pub fn cell_color(class: CellClass) -> Color {
    match class {
        CellClass::Empty => BACKGROUND,
        CellClass::Wall => WALL,
        CellClass::Start => START,
        CellClass::Goal => GOAL,
        CellClass::Open => OPEN,
        CellClass::Closed => CLOSED,
        CellClass::Path => PATH,
        CellClass::PathTrickle => PATH_TRICKLE,
    }
}
