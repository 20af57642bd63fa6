//! The background step worker.
//!
//! One worker thread exists per running search. It takes the engine lock,
//! advances the search by exactly one step, releases the lock and (in
//! stepped mode) sleeps before the next one. It exits as soon as its own
//! [`Context`] is cancelled or the state machine leaves `Running`, both of
//! which are checked under the lock before every step.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::context::Context;
use crate::session::{Advance, Shared};
use crate::state::SearchState;

/// Spawn a worker for the search started in `epoch`.
pub(crate) fn spawn(shared: Arc<Shared>, ctx: Context, epoch: u64) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("path-solver".into())
        .spawn(move || run(&shared, &ctx, epoch))
}

fn run(shared: &Arc<Shared>, ctx: &Context, epoch: u64) {
    log::debug!("solver worker for search #{epoch} started");
    loop {
        let advance = {
            let mut engine = shared.engine.lock();
            if ctx.is_done() || engine.state != SearchState::Running {
                break;
            }
            engine.advance()
        };
        match advance {
            Advance::Continue(Some(delay)) if !delay.is_zero() => {
                // A cancelled sleep falls through to the check at the top.
                ctx.sleep(delay);
            }
            Advance::Continue(_) => {}
            Advance::Found(path) => {
                shared.launch_animator(epoch, &path);
                break;
            }
            Advance::Finished => break,
        }
    }
    log::debug!("solver worker for search #{epoch} exiting");
}
