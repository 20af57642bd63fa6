//! The Elm-architecture application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].

use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crate::canvas::{Canvas, compute_frame};
use crate::input::Msg;

/// A side-effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Redraw the whole screen on the next frame.
    Repaint,
    /// Stop the application loop.
    End,
}

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `canvas`.
    fn draw(&self, canvas: &mut Canvas);
}

/// Back-end driver.
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Wait up to `timeout` for input and send whatever arrived through
    /// `tx`.
    fn poll_msgs(&mut self, timeout: Duration, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>>;

    /// Write a computed frame to the screen.
    fn flush(&mut self, frame: crate::canvas::Frame) -> Result<(), Box<dyn Error>>;

    /// Restore the terminal.
    fn close(&mut self);
}

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
    /// Longest wait for input before a [`Msg::Tick`] is delivered.
    pub tick: Duration,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: i32,
    height: i32,
    tick: Duration,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
            tick: config.tick,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run the update/draw loop.
    ///
    /// 1. Initialises the driver and sends `Msg::Init` to the model.
    /// 2. Loops: poll → tick → update → draw → diff → flush.
    /// 3. Stops when the model returns `Effect::End`.
    ///
    /// The driver is closed on every exit path.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.driver.init()?;
        let result = self.run_loop();
        self.driver.close();
        result
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        // An empty previous canvas forces a full first frame.
        let mut prev = Canvas::new(0, 0);
        let mut curr = Canvas::new(self.width, self.height);

        loop {
            if self.process_pending(&rx, &mut prev, &mut curr)? {
                return Ok(());
            }
            self.driver.poll_msgs(self.tick, &tx)?;
            tx.send(Msg::Tick).ok();
        }
    }

    /// Drain queued messages, update the model, draw, diff and flush.
    /// Returns `true` once the model asked to stop.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        prev: &mut Canvas,
        curr: &mut Canvas,
    ) -> Result<bool, Box<dyn Error>> {
        let mut needs_draw = false;
        while let Ok(msg) = rx.try_recv() {
            if let Msg::Resize { width, height } = msg {
                self.width = width;
                self.height = height;
                *curr = Canvas::new(width, height);
                *prev = Canvas::new(0, 0);
            }
            match self.model.update(msg) {
                Some(Effect::End) => return Ok(true),
                Some(Effect::Repaint) => *prev = Canvas::new(0, 0),
                None => {}
            }
            needs_draw = true;
        }

        if needs_draw {
            self.model.draw(curr);
            let frame = compute_frame(prev, curr);
            if !frame.cells.is_empty() || frame.full {
                self.driver.flush(frame)?;
            }
            prev.clone_from(curr);
        }
        Ok(false)
    }
}
