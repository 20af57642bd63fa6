//! Outbound notifications and the sink they are published to.

use std::sync::mpsc;

use crate::grid::CellChange;
use crate::state::SearchState;

/// Something a renderer needs to know about.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A batch of cells changed class. Batches arrive in the order the
    /// engine produced them.
    CellsChanged(Vec<CellChange>),
    /// The search state machine moved.
    StateChanged(SearchState),
    /// A transient, user-facing message.
    Message(String),
    /// The grid was replaced wholesale and now has this side length. The
    /// renderer should resync from [`Session::classes`](crate::Session::classes).
    Resized(i32),
}

/// A sink for [`Notification`]s.
///
/// The engine calls [`notify`](Notifier::notify) while holding its lock, so
/// implementations must not call back into the session and should return
/// quickly.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A channel sender is a notifier; a dropped receiver is ignored.
impl Notifier for mpsc::Sender<Notification> {
    fn notify(&self, notification: Notification) {
        if self.send(notification).is_err() {
            log::trace!("notification dropped: receiver gone");
        }
    }
}

/// A notifier that forwards to a closure.
impl<F> Notifier for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}
