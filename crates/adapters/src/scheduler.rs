// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-tick callback scheduling.
//!
//! The host drives a frame loop and invokes subscribers once per frame.
//! Subscriptions are scoped: dropping the returned [`Subscription`] removes
//! the callback, so an owner cannot be called after it has been torn down.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::{Arc, Weak};

/// Callback invoked once per tick.
pub type TickCallback = Box<dyn FnMut() + Send>;

/// Source of per-tick callbacks.
pub trait Scheduler: Send + Sync {
    fn subscribe(&self, callback: TickCallback) -> Subscription;
}

/// Guard for a registered callback; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    unsubscribe: Option<Box<dyn FnOnce(u64) + Send>>,
}

impl Subscription {
    pub fn new(id: u64, unsubscribe: impl FnOnce(u64) + Send + 'static) -> Self {
        Self { id, unsubscribe: Some(Box::new(unsubscribe)) }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[derive(Default)]
struct TickSchedulerInner {
    next_id: u64,
    callbacks: Vec<(u64, TickCallback)>,
    /// Ids dropped while their callback was running.
    removed: HashSet<u64>,
    ticking: bool,
}

/// Scheduler driven by explicit [`TickScheduler::tick`] calls.
///
/// Callbacks may subscribe or unsubscribe from inside a tick; changes take
/// effect from the next tick.
#[derive(Clone, Default)]
pub struct TickScheduler {
    inner: Arc<Mutex<TickSchedulerInner>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every subscribed callback once, in subscription order.
    ///
    /// Callbacks removed during the tick are dropped outside the lock.
    pub fn tick(&self) {
        let mut running = {
            let mut inner = self.inner.lock();
            inner.ticking = true;
            std::mem::take(&mut inner.callbacks)
        };
        for (_, callback) in running.iter_mut() {
            callback();
        }

        let dropped: Vec<(u64, TickCallback)> = {
            let mut inner = self.inner.lock();
            inner.ticking = false;
            let removed = std::mem::take(&mut inner.removed);
            let (mut kept, dropped): (Vec<_>, Vec<_>) =
                running.into_iter().partition(|(id, _)| !removed.contains(id));
            kept.append(&mut inner.callbacks);
            inner.callbacks = kept;
            dropped
        };
        drop(dropped);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().callbacks.len()
    }

    fn unsubscribe(inner: &Weak<Mutex<TickSchedulerInner>>, id: u64) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let entry = {
            let mut inner = inner.lock();
            match inner.callbacks.iter().position(|(cb_id, _)| *cb_id == id) {
                Some(pos) => Some(inner.callbacks.remove(pos)),
                None => {
                    // Not registered right now: it is mid-tick.
                    if inner.ticking {
                        inner.removed.insert(id);
                    }
                    None
                }
            }
        };
        drop(entry);
    }
}

impl Scheduler for TickScheduler {
    fn subscribe(&self, callback: TickCallback) -> Subscription {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.push((id, callback));
        let weak = Arc::downgrade(&self.inner);
        Subscription::new(id, move |id| TickScheduler::unsubscribe(&weak, id))
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
