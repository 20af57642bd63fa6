//! **pathgrid-term**: a small Elm-style terminal front-end.
//!
//! A [`Model`] receives input [`Msg`]s and draws onto a [`Canvas`]; the
//! [`App`] loop diffs consecutive canvases and hands the resulting
//! [`Frame`] to a [`Driver`]. [`CrosstermDriver`] is the terminal driver.

pub mod app;
pub mod backend;
pub mod canvas;
pub mod input;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use backend::CrosstermDriver;
pub use canvas::{Attr, Canvas, Color, Frame, FrameCell, Glyph, Style, compute_frame};
pub use input::{Key, Msg, MouseAction};
