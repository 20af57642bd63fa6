//! Elm-architecture model over a [`Session`].

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use pathgrid::{
    CellClass, EngineError, GridSnapshot, MAX_SPEED, Notification, Point, Relaxation,
    SearchState, Session,
};
use pathgrid_term::{Attr, Canvas, Effect, Glyph, Key, Model, MouseAction, Msg, Style};
use rand::rngs::StdRng;

use crate::colors::*;
use crate::messages::MessageLog;

/// Rows above the grid: status bar and message line.
const GRID_TOP: i32 = 2;
/// Terminal columns per grid cell.
const CELL_WIDTH: i32 = 2;
const SPEED_STEP: u8 = 5;
const WALL_DENSITY: f64 = 0.25;

const HELP: &str = "space run/pause  n step  r reset  w/s/g/x paint  m maze  \
d diag  h heur  a algo  l relax  v steps  +/- speed  [/] size  S/L save/load  q quit";

/// What a left click paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Wall,
    Start,
    Goal,
    Erase,
}

impl Brush {
    fn label(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Start => "start",
            Self::Goal => "goal",
            Self::Erase => "erase",
        }
    }
}

pub struct PathModel {
    session: Session,
    events: Receiver<Notification>,
    /// Row-major copy of the grid, kept current from notifications.
    cells: Vec<CellClass>,
    dimension: i32,
    state: SearchState,
    log: MessageLog,
    brush: Brush,
    snapshot_path: PathBuf,
    rng: StdRng,
}

impl PathModel {
    pub fn new(
        session: Session,
        events: Receiver<Notification>,
        snapshot_path: PathBuf,
        rng: StdRng,
    ) -> Self {
        let mut model = Self {
            cells: Vec::new(),
            dimension: 0,
            state: session.state(),
            session,
            events,
            log: MessageLog::new(),
            brush: Brush::Wall,
            snapshot_path,
            rng,
        };
        model.resync();
        model
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The mirrored class of grid cell `p`.
    pub fn class_at(&self, p: Point) -> Option<CellClass> {
        p.in_square(self.dimension)
            .then(|| self.cells[(p.y * self.dimension + p.x) as usize])
    }

    /// The grid cell under terminal position `pos`.
    pub fn cell_at(&self, pos: Point) -> Option<Point> {
        if pos.x < 0 || pos.y < GRID_TOP {
            return None;
        }
        let p = Point::new(pos.x / CELL_WIDTH, pos.y - GRID_TOP);
        p.in_square(self.dimension).then_some(p)
    }

    fn resync(&mut self) {
        self.dimension = self.session.dimension();
        self.cells = self.session.classes();
    }

    /// Apply everything the engine published since the last call.
    fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events.try_recv() {
            changed = true;
            match event {
                Notification::CellsChanged(changes) => {
                    for c in changes {
                        if c.pos.in_square(self.dimension) {
                            self.cells[(c.pos.y * self.dimension + c.pos.x) as usize] = c.class;
                        }
                    }
                }
                Notification::StateChanged(state) => self.state = state,
                Notification::Message(text) => self.log.push(text),
                Notification::Resized(_) => self.resync(),
            }
        }
        changed
    }

    /// User input errors reach us as [`Notification::Message`] already.
    fn report(&mut self, result: Result<(), EngineError>) {
        if let Err(e) = result {
            if !e.is_user_input() {
                log::error!("{e}");
                self.log.push(e.to_string());
            }
        }
    }

    fn paint(&mut self, cell: Point, brush: Brush) {
        let result = match brush {
            Brush::Wall => self.session.place_wall(cell),
            Brush::Start => self.session.place_start(cell),
            Brush::Goal => self.session.place_goal(cell),
            Brush::Erase => self.session.remove_wall(cell),
        };
        self.report(result);
    }

    fn save(&mut self) {
        let snapshot = self.session.export_snapshot();
        let result = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(&self.snapshot_path, json).map_err(|e| e.to_string()));
        match result {
            Ok(()) => {
                log::info!("saved grid to {}", self.snapshot_path.display());
                self.log.push(format!("Saved {}", self.snapshot_path.display()));
            }
            Err(e) => {
                log::warn!("saving {} failed: {e}", self.snapshot_path.display());
                self.log.push(format!("Save failed: {e}"));
            }
        }
    }

    fn load(&mut self) {
        let parsed = fs::read_to_string(&self.snapshot_path)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                serde_json::from_str::<GridSnapshot>(&json).map_err(|e| e.to_string())
            });
        match parsed {
            Ok(snapshot) => {
                let result = self.session.import_snapshot(&snapshot);
                self.report(result);
            }
            Err(e) => {
                log::warn!("loading {} failed: {e}", self.snapshot_path.display());
                self.log.push(format!("Load failed: {e}"));
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        let config = self.session.config();
        match key {
            Key::Char('q') | Key::Escape => return Some(Effect::End),
            Key::Char(' ') | Key::Enter => {
                let result = self.session.toggle();
                self.report(result);
            }
            Key::Char('n') => {
                let result = self.session.step();
                self.report(result);
            }
            Key::Char('p') => self.session.pause(),
            Key::Char('r') => {
                self.session.reset();
                self.log.clear();
            }
            Key::Char('w') => self.brush = Brush::Wall,
            Key::Char('s') => self.brush = Brush::Start,
            Key::Char('g') => self.brush = Brush::Goal,
            Key::Char('x') => self.brush = Brush::Erase,
            Key::Char('m') => {
                let result = self.session.scatter_walls(&mut self.rng, WALL_DENSITY);
                self.report(result);
            }
            Key::Char('d') => self.session.set_diagonals_enabled(!config.diagonals),
            Key::Char('h') => self.session.set_heuristic(config.heuristic.toggled()),
            Key::Char('a') => self.session.set_algorithm(config.algorithm.toggled()),
            Key::Char('l') => self.session.set_relaxation(match config.relaxation {
                Relaxation::Cost => Relaxation::Heuristic,
                Relaxation::Heuristic => Relaxation::Cost,
            }),
            Key::Char('v') => self.session.set_step_visible(!config.show_steps),
            Key::Char('+') | Key::Char('=') => {
                self.session
                    .set_speed(config.speed.saturating_add(SPEED_STEP).min(MAX_SPEED));
            }
            Key::Char('-') => self.session.set_speed(config.speed.saturating_sub(SPEED_STEP)),
            Key::Char('[') => {
                let result = self.session.set_dimension(self.dimension - 1);
                self.report(result);
            }
            Key::Char(']') => {
                let result = self.session.set_dimension(self.dimension + 1);
                self.report(result);
            }
            Key::Char('S') => self.save(),
            Key::Char('L') => self.load(),
            _ => return None,
        }
        self.drain_events();
        None
    }

    fn handle_mouse(&mut self, action: MouseAction, pos: Point) {
        let Some(cell) = self.cell_at(pos) else {
            return;
        };
        match action {
            MouseAction::Main | MouseAction::DragMain => self.paint(cell, self.brush),
            MouseAction::Secondary | MouseAction::DragSecondary => self.paint(cell, Brush::Erase),
            MouseAction::Release => return,
        }
        self.drain_events();
    }

    // -------------------------------------------------------------------
    // Draw
    // -------------------------------------------------------------------

    fn draw_status(&self, canvas: &mut Canvas) {
        let config = self.session.config();
        let relaxation = match config.relaxation {
            Relaxation::Cost => "",
            Relaxation::Heuristic => " (legacy)",
        };
        let status = format!(
            " {}{} | {} | {}-dir | speed {} | steps {} | brush {} | ",
            config.algorithm.label(),
            relaxation,
            config.heuristic.label(),
            if config.diagonals { 8 } else { 4 },
            config.speed,
            self.session.steps_taken(),
            self.brush.label(),
        );
        let style = Style::default().with_fg(TEXT).with_bg(WALL);
        for x in 0..canvas.width() {
            canvas.set(Point::new(x, 0), Glyph::new(' ', style));
        }
        let x = canvas.print(Point::ZERO, &status, style);
        canvas.print(
            Point::new(x, 0),
            self.state.label(),
            style.with_attrs(Attr::BOLD),
        );
    }

    fn draw_grid(&self, canvas: &mut Canvas) {
        for (i, &class) in self.cells.iter().enumerate() {
            let i = i as i32;
            let (cx, cy) = (i % self.dimension, i / self.dimension);
            let style = Style::default().with_bg(cell_color(class));
            for dx in 0..CELL_WIDTH {
                canvas.set(
                    Point::new(cx * CELL_WIDTH + dx, cy + GRID_TOP),
                    Glyph::new(' ', style),
                );
            }
        }
    }
}

impl Model for PathModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                self.resync();
                Some(Effect::Repaint)
            }
            Msg::Tick => {
                self.drain_events();
                None
            }
            Msg::Key(key) => self.handle_key(key),
            Msg::Mouse { action, pos } => {
                self.handle_mouse(action, pos);
                None
            }
            Msg::Resize { .. } => Some(Effect::Repaint),
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill(Glyph::default());
        self.draw_status(canvas);
        if let Some(text) = self.log.latest() {
            canvas.print(Point::new(1, 1), &text, Style::default().with_fg(MESSAGE));
        }
        self.draw_grid(canvas);
        let footer = canvas.height() - 1;
        if footer > GRID_TOP + self.dimension {
            canvas.print(Point::new(1, footer), HELP, Style::default().with_fg(TEXT_DIM));
        }
    }
}
