//! The looping path animation.
//!
//! Once a path is found, a [`PathAnimator`] first reveals it cell by cell
//! from start to goal, then sweeps a [`PathTrickle`](CellClass::PathTrickle)
//! highlight forward and backward along it until it is killed. It runs on its
//! own thread, independent of the search worker, and paints through a
//! [`TrickleTarget`].

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::context::Context;
use crate::geom::Point;
use crate::grid::CellClass;

/// Where an animator paints.
pub trait TrickleTarget: Send + Sync + 'static {
    /// Show `class` at `pos`, unless `ctx` has been cancelled.
    ///
    /// Implementations must check `ctx` while holding whatever lock guards
    /// the painted cells, so that no repaint lands after
    /// [`PathAnimator::kill`] returns. Returns `false` once the animation
    /// should stop.
    fn repaint(&self, ctx: &Context, pos: Point, class: CellClass) -> bool;
}

/// Handle to a running path animation. Dropping it kills the animation.
#[derive(Debug)]
pub struct PathAnimator {
    ctx: Context,
    handle: Option<JoinHandle<()>>,
}

impl PathAnimator {
    /// Start animating `path` (start → goal order) on a new thread, with
    /// `interval` between two colour transitions.
    pub fn spawn<T: TrickleTarget>(
        target: Arc<T>,
        path: Vec<Point>,
        interval: Duration,
    ) -> io::Result<Self> {
        let ctx = Context::new();
        let thread_ctx = ctx.clone();
        let handle = thread::Builder::new()
            .name("path-trickle".into())
            .spawn(move || {
                log::debug!("path animator started over {} cells", path.len());
                animate(&*target, &thread_ctx, &path, interval);
                log::debug!("path animator stopped");
            })?;
        Ok(Self {
            ctx,
            handle: Some(handle),
        })
    }

    /// Whether the animation thread is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the animation and wait for its thread to exit.
    pub fn kill(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.ctx.cancel();
        let Some(handle) = self.handle.take() else {
            return;
        };
        if handle.thread().id() == thread::current().id() {
            return;
        }
        if handle.join().is_err() {
            log::error!("path animator panicked");
        }
    }
}

impl Drop for PathAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn animate<T: TrickleTarget + ?Sized>(target: &T, ctx: &Context, path: &[Point], interval: Duration) {
    if path.is_empty() {
        return;
    }
    for &p in path {
        if !target.repaint(ctx, p, CellClass::Path) || !ctx.sleep(interval) {
            return;
        }
    }
    let flash = |p: Point| {
        target.repaint(ctx, p, CellClass::PathTrickle)
            && ctx.sleep(interval)
            && target.repaint(ctx, p, CellClass::Path)
    };
    loop {
        for &p in path {
            if !flash(p) {
                return;
            }
        }
        for &p in path.iter().rev() {
            if !flash(p) {
                return;
            }
        }
    }
}
