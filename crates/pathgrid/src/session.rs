//! The command boundary.
//!
//! A [`Session`] owns one grid, at most one search worker and at most one
//! path animator. Inbound commands are methods on the session; everything a
//! renderer needs to know leaves through the session's [`Notifier`].
//!
//! All mutable state lives in a single engine behind one lock. A search step,
//! a grid edit and an animation repaint each hold that lock for their whole
//! duration and never across a sleep. Notifications are published while the
//! lock is held, so they reach the notifier in the order the engine produced
//! them.
//!
//! Lock order: animator slot, then engine.

use std::mem;
use std::sync::{Arc, mpsc};
use std::thread::JoinHandle;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;

use crate::animator::{PathAnimator, TrickleTarget};
use crate::config::{MAX_DIMENSION, MAX_SPEED, MIN_DIMENSION, SessionConfig};
use crate::context::Context;
use crate::error::{EngineError, Result};
use crate::geom::Point;
use crate::grid::{CellChange, CellClass, GridModel};
use crate::heuristic::{Algorithm, HeuristicKind};
use crate::notify::{Notification, Notifier};
use crate::scheduler;
use crate::search::{Relaxation, SearchController, SolvedPath, StepOutcome};
use crate::snapshot::GridSnapshot;
use crate::state::{SearchState, Trigger};

/// Message published when a search runs out of open nodes.
pub const EXHAUSTED_MESSAGE: &str = "Simulation exhausted search space";

// ----------------------------------------------------------------------------
// Engine
// ----------------------------------------------------------------------------

/// What the worker should do after one step.
pub(crate) enum Advance {
    /// Keep going, sleeping this long first.
    Continue(Option<Duration>),
    /// The goal was reached; animate this path.
    Found(SolvedPath),
    /// The search ended or there was nothing to step.
    Finished,
}

/// Everything guarded by the engine lock.
pub(crate) struct Engine {
    pub(crate) grid: GridModel,
    pub(crate) state: SearchState,
    pub(crate) config: SessionConfig,
    controller: Option<SearchController>,
    worker_ctx: Option<Context>,
    /// Diffs held back in instant mode.
    pending: Vec<CellChange>,
    /// Bumped whenever a new search is prepared or the session is reset, so
    /// late work from an older search can recognise itself.
    epoch: u64,
    steps: usize,
    last_path: Option<SolvedPath>,
    notifier: Box<dyn Notifier>,
}

impl Engine {
    fn publish(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    fn publish_changes(&self, changes: Vec<CellChange>) {
        if !changes.is_empty() {
            self.publish(Notification::CellsChanged(changes));
        }
    }

    /// Report a rejected command and hand the error back.
    fn reject(&self, err: EngineError) -> EngineError {
        log::warn!("command rejected: {err}");
        self.publish(Notification::Message(err.to_string()));
        err
    }

    /// Drive the state machine, publishing the new state if the trigger is
    /// valid.
    fn fire(&mut self, trigger: Trigger) -> bool {
        match self.state.next(trigger) {
            Some(next) => {
                log::info!("{:?} -> {:?} on {:?}", self.state, next, trigger);
                self.state = next;
                self.publish(Notification::StateChanged(next));
                true
            }
            None => {
                log::debug!("ignoring {:?} while {:?}", trigger, self.state);
                false
            }
        }
    }

    fn ensure_editable(&self, action: &'static str) -> Result<()> {
        if self.state.in_progress() {
            return Err(self.reject(EngineError::SearchInProgress {
                action,
                state: self.state,
            }));
        }
        Ok(())
    }

    fn check_endpoints(&self) -> Result<()> {
        if self.grid.start().is_none() {
            return Err(self.reject(EngineError::MissingStart));
        }
        if self.grid.goal().is_none() {
            return Err(self.reject(EngineError::MissingGoal));
        }
        Ok(())
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let batch = mem::take(&mut self.pending);
            self.publish(Notification::CellsChanged(batch));
        }
    }

    fn paint(&mut self, changes: &[CellChange]) {
        for c in changes {
            if let Err(err) = self.grid.set_cell(c.pos, c.class) {
                log::warn!("dropping search change: {err}");
            }
        }
    }

    fn cancel_worker(&mut self) {
        if let Some(ctx) = self.worker_ctx.take() {
            ctx.cancel();
        }
    }

    /// Snapshot the grid into a fresh controller and clear old overlays.
    fn prepare_search(&mut self) -> Result<()> {
        let controller = SearchController::new(&self.grid, self.config.search_config())
            .map_err(|e| self.reject(e))?;
        let cleared = self.grid.clear_overlays();
        self.publish_changes(cleared);
        self.controller = Some(controller);
        self.pending.clear();
        self.steps = 0;
        self.last_path = None;
        self.epoch += 1;
        log::debug!("search #{} prepared", self.epoch);
        Ok(())
    }

    /// Take one search step.
    pub(crate) fn advance(&mut self) -> Advance {
        let Some(controller) = self.controller.as_mut() else {
            return Advance::Finished;
        };
        let outcome = controller.step();
        self.steps = controller.steps();

        match outcome {
            StepOutcome::Expanded(changes) => {
                self.paint(&changes);
                if self.config.show_steps {
                    self.flush();
                    self.publish_changes(changes);
                    Advance::Continue(Some(self.config.step_delay()))
                } else {
                    self.pending.extend(changes);
                    Advance::Continue(None)
                }
            }
            StepOutcome::Found(path) => {
                self.flush();
                self.controller = None;
                log::info!(
                    "path found after {} steps: {} moves, cost {:.3}",
                    self.steps,
                    path.moves(),
                    path.cost
                );
                self.last_path = Some(path.clone());
                self.fire(Trigger::GoalReached);
                Advance::Found(path)
            }
            StepOutcome::Exhausted => {
                self.flush();
                self.controller = None;
                log::info!("search space exhausted after {} steps", self.steps);
                self.publish(Notification::Message(EXHAUSTED_MESSAGE.to_string()));
                self.fire(Trigger::Exhausted);
                Advance::Finished
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Shared
// ----------------------------------------------------------------------------

/// State shared between the session, its worker and its animator.
pub(crate) struct Shared {
    pub(crate) engine: Mutex<Engine>,
    animator: Mutex<Option<PathAnimator>>,
}

impl Shared {
    /// Start animating `path` if the search of `epoch` is still the one on
    /// display.
    pub(crate) fn launch_animator(self: &Arc<Self>, epoch: u64, path: &SolvedPath) {
        if path.cells.is_empty() {
            log::debug!("goal adjacent to start, nothing to animate");
            return;
        }
        let mut slot = self.animator.lock();
        let interval = {
            let engine = self.engine.lock();
            if engine.epoch != epoch || engine.state != SearchState::PathFound {
                log::debug!("search #{epoch} is stale, not animating");
                return;
            }
            engine.config.trickle_interval
        };
        if let Some(old) = slot.take() {
            old.kill();
        }
        match PathAnimator::spawn(Arc::clone(self), path.cells.clone(), interval) {
            Ok(animator) => *slot = Some(animator),
            Err(err) => log::error!("could not spawn the path animator: {err}"),
        }
    }

    fn kill_animator(&self) {
        let old = self.animator.lock().take();
        if let Some(animator) = old {
            animator.kill();
        }
    }
}

impl TrickleTarget for Shared {
    fn repaint(&self, ctx: &Context, pos: Point, class: CellClass) -> bool {
        let mut engine = self.engine.lock();
        if ctx.is_done() {
            return false;
        }
        // Only cells still showing search results are repainted; anything
        // the user drew since is left alone.
        let current = engine.grid.class_at(pos);
        if current.is_some_and(CellClass::is_overlay) && current != Some(class) {
            if let Ok(changes) = engine.grid.set_cell(pos, class) {
                engine.publish_changes(changes);
            }
        }
        true
    }
}

fn launch_worker(
    shared: &Arc<Shared>,
    engine: &mut Engine,
    fallback: SearchState,
) -> Result<JoinHandle<()>> {
    let ctx = Context::new();
    engine.worker_ctx = Some(ctx.clone());
    scheduler::spawn(Arc::clone(shared), ctx, engine.epoch).map_err(|e| {
        log::error!("could not spawn the solver worker: {e}");
        engine.worker_ctx = None;
        engine.state = fallback;
        engine.publish(Notification::StateChanged(fallback));
        let err = EngineError::Spawn(e);
        engine.publish(Notification::Message(err.to_string()));
        err
    })
}

// ----------------------------------------------------------------------------
// Session
// ----------------------------------------------------------------------------

/// One pathfinding session: a grid, its search and its animation.
///
/// Dropping the session stops the worker and the animator and waits for
/// both threads.
pub struct Session {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
    initial: SessionConfig,
}

impl Session {
    /// Open a session with the canonical grid for `config.dimension`.
    pub fn new<N: Notifier + 'static>(config: SessionConfig, notifier: N) -> Result<Self> {
        let config = config.clone().with_speed(config.speed);
        let grid = GridModel::with_defaults(config.dimension)?;
        log::debug!(
            "session opened: {0}x{0} grid, speed {1}",
            config.dimension,
            config.speed
        );
        let engine = Engine {
            grid,
            state: SearchState::NotStarted,
            config: config.clone(),
            controller: None,
            worker_ctx: None,
            pending: Vec::new(),
            epoch: 0,
            steps: 0,
            last_path: None,
            notifier: Box::new(notifier),
        };
        Ok(Self {
            shared: Arc::new(Shared {
                engine: Mutex::new(engine),
                animator: Mutex::new(None),
            }),
            worker: None,
            initial: config,
        })
    }

    /// Open a session whose notifications arrive on a channel.
    pub fn with_channel(config: SessionConfig) -> Result<(Self, mpsc::Receiver<Notification>)> {
        let (tx, rx) = mpsc::channel();
        Ok((Self::new(config, tx)?, rx))
    }

    // ---- grid edits --------------------------------------------------------

    pub fn place_wall(&mut self, p: Point) -> Result<()> {
        self.edit("place a wall", |grid| grid.set_cell(p, CellClass::Wall))
    }

    pub fn remove_wall(&mut self, p: Point) -> Result<()> {
        self.edit("remove a wall", |grid| grid.remove_wall(p))
    }

    /// Move the start cell to `p`.
    pub fn place_start(&mut self, p: Point) -> Result<()> {
        self.edit("move the start", |grid| grid.set_cell(p, CellClass::Start))
    }

    /// Move the goal cell to `p`.
    pub fn place_goal(&mut self, p: Point) -> Result<()> {
        self.edit("move the goal", |grid| grid.set_cell(p, CellClass::Goal))
    }

    /// Turn roughly `density` of the empty cells into walls. `density` must
    /// lie in `0..=1`.
    pub fn scatter_walls<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<()> {
        self.edit("scatter walls", |grid| {
            if !(0.0..=1.0).contains(&density) {
                return Err(EngineError::InvalidDensity(density));
            }
            Ok(grid.scatter_walls(rng, density))
        })
    }

    fn edit(
        &mut self,
        action: &'static str,
        f: impl FnOnce(&mut GridModel) -> Result<Vec<CellChange>>,
    ) -> Result<()> {
        let mut engine = self.shared.engine.lock();
        engine.ensure_editable(action)?;
        let changes = f(&mut engine.grid).map_err(|e| engine.reject(e))?;
        engine.publish_changes(changes);
        Ok(())
    }

    /// Change the side length of the grid. Walls inside the new bounds are
    /// kept; a start or goal outside them is dropped.
    pub fn set_dimension(&mut self, dimension: i32) -> Result<()> {
        {
            let engine = self.shared.engine.lock();
            engine.ensure_editable("resize the grid")?;
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
                return Err(engine.reject(EngineError::InvalidDimension(dimension)));
            }
            if engine.grid.dimension() == dimension {
                return Ok(());
            }
        }
        self.join_worker();
        self.shared.kill_animator();

        let mut engine = self.shared.engine.lock();
        engine.grid.clear_overlays();
        engine.grid.resize(dimension).map_err(|e| engine.reject(e))?;
        engine.config.dimension = dimension;
        engine.epoch += 1;
        log::info!("grid resized to {dimension}x{dimension}");
        engine.publish(Notification::Resized(dimension));
        Ok(())
    }

    /// Replace the grid with the one described by `snapshot`.
    pub fn import_snapshot(&mut self, snapshot: &GridSnapshot) -> Result<()> {
        let grid = {
            let engine = self.shared.engine.lock();
            engine.ensure_editable("load a grid")?;
            snapshot.to_grid().map_err(|e| engine.reject(e))?
        };
        self.join_worker();
        self.shared.kill_animator();

        let mut engine = self.shared.engine.lock();
        let dimension = grid.dimension();
        engine.grid = grid;
        engine.config.dimension = dimension;
        engine.epoch += 1;
        log::info!(
            "loaded a {dimension}x{dimension} grid with {} walls",
            snapshot.walls.len()
        );
        engine.publish(Notification::Resized(dimension));
        Ok(())
    }

    /// The walls and endpoints of the current grid.
    pub fn export_snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.shared.engine.lock().grid)
    }

    // ---- toggles -----------------------------------------------------------
    //
    // Heuristic, algorithm, diagonal and relaxation settings are read when a
    // search starts. Speed and step visibility apply at the next step.

    pub fn set_heuristic(&mut self, kind: HeuristicKind) {
        self.shared.engine.lock().config.heuristic = kind;
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.shared.engine.lock().config.algorithm = algorithm;
    }

    pub fn set_diagonals_enabled(&mut self, enabled: bool) {
        self.shared.engine.lock().config.diagonals = enabled;
    }

    pub fn set_relaxation(&mut self, relaxation: Relaxation) {
        self.shared.engine.lock().config.relaxation = relaxation;
    }

    /// Switch between stepped (`true`) and instant (`false`) scheduling.
    pub fn set_step_visible(&mut self, visible: bool) {
        let mut engine = self.shared.engine.lock();
        engine.config.show_steps = visible;
        if visible {
            engine.flush();
        }
    }

    /// Set the step rate, clamped to `0..=MAX_SPEED`.
    pub fn set_speed(&mut self, speed: u8) {
        self.shared.engine.lock().config.speed = speed.min(MAX_SPEED);
    }

    // ---- search control ----------------------------------------------------

    /// Start a new search.
    ///
    /// Accepted from `NotStarted` and from either terminal state; a no-op
    /// while a search is running or paused. Fails without a state change if
    /// the start or goal is missing.
    pub fn start(&mut self) -> Result<()> {
        {
            let engine = self.shared.engine.lock();
            if engine.state.next(Trigger::Start).is_none() {
                log::debug!("start ignored while {:?}", engine.state);
                return Ok(());
            }
            engine.check_endpoints()?;
        }
        self.join_worker();
        self.shared.kill_animator();

        let mut engine = self.shared.engine.lock();
        engine.prepare_search()?;
        engine.fire(Trigger::Start);
        self.worker = Some(launch_worker(&self.shared, &mut engine, SearchState::NotStarted)?);
        Ok(())
    }

    /// Halt the worker, keeping the open and closed sets. A no-op unless
    /// running.
    pub fn pause(&mut self) {
        let mut engine = self.shared.engine.lock();
        if engine.state != SearchState::Running {
            log::debug!("pause ignored while {:?}", engine.state);
            return;
        }
        engine.cancel_worker();
        engine.flush();
        engine.fire(Trigger::Pause);
    }

    /// Continue a paused search. A no-op unless paused.
    pub fn resume(&mut self) -> Result<()> {
        if self.shared.engine.lock().state != SearchState::Paused {
            log::debug!("resume ignored: search is not paused");
            return Ok(());
        }
        self.join_worker();

        let mut engine = self.shared.engine.lock();
        engine.fire(Trigger::Resume);
        self.worker = Some(launch_worker(&self.shared, &mut engine, SearchState::Paused)?);
        Ok(())
    }

    /// The start/pause button: pause when running, resume when paused,
    /// start a new search otherwise.
    pub fn toggle(&mut self) -> Result<()> {
        let state = self.shared.engine.lock().state;
        match state {
            SearchState::Running => {
                self.pause();
                Ok(())
            }
            SearchState::Paused => self.resume(),
            _ => self.start(),
        }
    }

    /// Take exactly one search step.
    ///
    /// From `Paused` this advances the current search. From `NotStarted` or
    /// a terminal state it prepares a new search, pauses it and takes its
    /// first step. A no-op while running.
    pub fn step(&mut self) -> Result<()> {
        let state = self.shared.engine.lock().state;
        match state {
            SearchState::Running => return Ok(()),
            SearchState::Paused => {}
            _ => {
                self.shared.engine.lock().check_endpoints()?;
                self.join_worker();
                self.shared.kill_animator();
                let mut engine = self.shared.engine.lock();
                engine.prepare_search()?;
                engine.fire(Trigger::Step);
            }
        }

        let (advance, epoch) = {
            let mut engine = self.shared.engine.lock();
            let advance = engine.advance();
            engine.flush();
            (advance, engine.epoch)
        };
        if let Advance::Found(path) = advance {
            self.shared.launch_animator(epoch, &path);
        }
        Ok(())
    }

    /// Return to the state the session was opened in: canonical grid,
    /// initial configuration, no search and no animation. Safe to call in
    /// any state, any number of times.
    pub fn reset(&mut self) {
        self.shared.engine.lock().cancel_worker();
        self.join_worker();
        self.shared.kill_animator();

        let dimension = self.initial.dimension;
        let mut engine = self.shared.engine.lock();
        if let Err(err) = engine.grid.reset(dimension) {
            log::error!("could not restore the {dimension}x{dimension} grid: {err}");
        }
        engine.config = self.initial.clone();
        engine.controller = None;
        engine.pending.clear();
        engine.steps = 0;
        engine.last_path = None;
        engine.epoch += 1;
        log::info!("session reset");
        engine.publish(Notification::Resized(engine.grid.dimension()));
        engine.fire(Trigger::Reset);
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("solver worker panicked");
            }
        }
    }

    // ---- queries -----------------------------------------------------------

    pub fn state(&self) -> SearchState {
        self.shared.engine.lock().state
    }

    pub fn dimension(&self) -> i32 {
        self.shared.engine.lock().grid.dimension()
    }

    pub fn class_at(&self, p: Point) -> Option<CellClass> {
        self.shared.engine.lock().grid.class_at(p)
    }

    /// Row-major copy of every cell, for a full renderer resync.
    pub fn classes(&self) -> Vec<CellClass> {
        self.shared.engine.lock().grid.classes().to_vec()
    }

    /// The live configuration.
    pub fn config(&self) -> SessionConfig {
        self.shared.engine.lock().config.clone()
    }

    /// The path of the last successful search, until the next search or
    /// reset.
    pub fn last_path(&self) -> Option<SolvedPath> {
        self.shared.engine.lock().last_path.clone()
    }

    /// Steps taken by the current or last search.
    pub fn steps_taken(&self) -> usize {
        self.shared.engine.lock().steps
    }

    /// Whether a path animation is running.
    pub fn is_animating(&self) -> bool {
        self.shared
            .animator
            .lock()
            .as_ref()
            .is_some_and(PathAnimator::is_running)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shared.engine.lock().cancel_worker();
        self.join_worker();
        self.shared.kill_animator();
    }
}
