use std::fmt::Debug;

use flume::{Receiver, Sender};
use log::{debug, trace};

use crate::{Reducer, StateError, StateSyncStatus};

/// Owns the current snapshot of a [`Reducer`] and the queue of actions
/// posted from outside the UI thread.
#[derive(Debug)]
pub struct Store<S: Reducer> {
    state: S,
    status: StateSyncStatus,

    send: Sender<S::Action>,
    recv: Receiver<S::Action>,
}

impl<S> Default for Store<S>
where
    S: Reducer,
    S::Action: Debug,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store<S>
where
    S: Reducer,
    S::Action: Debug,
{
    pub fn new(state: S) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            state,
            status: StateSyncStatus::Init,
            send,
            recv,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn status(&self) -> StateSyncStatus {
        if self.status != StateSyncStatus::Dirty && !self.recv.is_empty() {
            return StateSyncStatus::Pending;
        }
        self.status
    }

    /// Applies `action` immediately.
    pub fn dispatch(&mut self, action: S::Action) {
        trace!("dispatch {action:?}");
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(action);
        self.status = StateSyncStatus::Dirty;
    }

    /// A cloneable handle that queues actions for the next [`Store::drain`].
    pub fn dispatcher(&self) -> Dispatcher<S::Action> {
        Dispatcher {
            send: self.send.clone(),
        }
    }

    /// Applies every queued action in arrival order, returning how many ran.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.recv.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        if applied > 0 {
            debug!("Applied {applied} queued action(s)");
        }
        applied
    }

    pub fn mark_clean(&mut self) {
        self.status = StateSyncStatus::Clean;
    }
}

/// Posts actions to a [`Store`] from async tasks or other threads.
#[derive(Debug)]
pub struct Dispatcher<A> {
    send: Sender<A>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
        }
    }
}

impl<A> Dispatcher<A>
where
    A: Debug,
{
    pub fn send(&self, action: A) -> Result<(), StateError> {
        self.send
            .send(action)
            .map_err(|err| StateError::disconnected(format!("{:?}", err.into_inner())))
    }
}
