/*!
 * Deferred Deletion
 *
 * Objects handed to a scheduler are torn down later, when the owning loop
 * gets around to it, never at the point of the request.
 */

use super::config::DeletionConfig;
use crate::core::errors::HostError;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// An object that can be torn down by a deletion scheduler
///
/// The default teardown simply drops the object.
pub trait Teardown: Send {
    /// Destroy the object
    fn teardown(self: Box<Self>) {}
}

/// Host primitive that queues objects for teardown at a later point
pub trait DeletionScheduler: Send + Sync {
    /// Queue `object` for deferred teardown
    ///
    /// Fire-and-forget: the caller never observes the teardown itself.
    fn schedule_deferred_destroy(&self, object: Box<dyn Teardown>);
}

struct QueueState {
    pending: VecDeque<Box<dyn Teardown>>,
    closed: bool,
    warned: bool,
}

struct QueueShared {
    state: Mutex<QueueState>,
    config: DeletionConfig,
}

impl Drop for QueueShared {
    fn drop(&mut self) {
        let pending = std::mem::take(&mut self.state.get_mut().pending);
        if !pending.is_empty() {
            debug!(count = pending.len(), "tearing down objects left in dropped deletion queue");
        }
        for object in pending {
            object.teardown();
        }
    }
}

/// Deferred-deletion queue driven by its owner's loop
///
/// Cloning yields another handle to the same queue. Objects that schedule
/// themselves should hold [`scheduler`](Self::scheduler) rather than a clone:
/// a pending object owning a strong handle would keep the queue alive forever.
///
/// # Example
///
/// ```rust
/// use scoped_guards::host::{DeletionQueue, DeletionScheduler, Teardown};
///
/// struct Widget;
/// impl Teardown for Widget {}
///
/// let queue = DeletionQueue::new();
/// queue.schedule_deferred_destroy(Box::new(Widget));
/// assert_eq!(queue.pending(), 1);
///
/// // Later, from the owning loop
/// assert_eq!(queue.process_deferred_deletes(), 1);
/// assert_eq!(queue.pending(), 0);
/// ```
#[derive(Clone)]
pub struct DeletionQueue {
    shared: Arc<QueueShared>,
}

impl DeletionQueue {
    /// Create a queue with the default configuration
    pub fn new() -> Self {
        Self::with_config(DeletionConfig::default())
    }

    /// Create a queue with a specific configuration
    pub fn with_config(config: DeletionConfig) -> Self {
        Self {
            shared: Arc::new(QueueShared {
                state: Mutex::new(QueueState {
                    pending: VecDeque::new(),
                    closed: false,
                    warned: false,
                }),
                config,
            }),
        }
    }

    /// Configuration this queue was built with
    pub fn config(&self) -> &DeletionConfig {
        &self.shared.config
    }

    /// Number of objects waiting for teardown
    pub fn pending(&self) -> usize {
        self.shared.state.lock().pending.len()
    }

    /// Whether `shutdown` has been called
    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    /// Non-owning handle to this queue
    pub fn downgrade(&self) -> WeakDeletionQueue {
        WeakDeletionQueue {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Shared scheduler handle for objects that delete themselves
    ///
    /// Built once and cloned into each object, so `DeleteLater::scheduler`
    /// is a reference-count bump. The handle does not keep the queue alive.
    pub fn scheduler(&self) -> Arc<dyn DeletionScheduler> {
        Arc::new(self.downgrade())
    }

    /// Queue an object, failing instead of tearing it down inline when closed
    ///
    /// A rejected object is handed back untouched alongside
    /// [`HostError::QueueClosed`]; the caller decides how to dispose of it.
    pub fn try_schedule(
        &self,
        object: Box<dyn Teardown>,
    ) -> Result<(), (HostError, Box<dyn Teardown>)> {
        self.enqueue(object)
            .map_err(|rejected| (HostError::QueueClosed, rejected))
    }

    /// Tear down queued objects in FIFO order
    ///
    /// Processes at most `batch_size` objects (all of them when zero). Objects
    /// scheduled while this runs wait for the next call. Returns the number
    /// of objects torn down.
    pub fn process_deferred_deletes(&self) -> usize {
        let batch = {
            let mut state = self.shared.state.lock();
            let take = match self.shared.config.batch_size {
                0 => state.pending.len(),
                n => n.min(state.pending.len()),
            };
            let batch: Vec<_> = state.pending.drain(..take).collect();
            if state.pending.len() < self.shared.config.pending_warn_threshold {
                state.warned = false;
            }
            batch
        };

        // Lock released: teardown may schedule more objects
        let count = batch.len();
        for object in batch {
            object.teardown();
        }

        if count > 0 {
            debug!(count, remaining = self.pending(), "processed deferred deletes");
        }
        count
    }

    /// Drain every pending object and close the queue
    ///
    /// Objects scheduled after shutdown are torn down immediately, since no
    /// loop will ever process them. Returns the number of objects drained.
    pub fn shutdown(&self) -> usize {
        self.shared.state.lock().closed = true;

        let mut total = 0;
        loop {
            let drained: Vec<_> = self.shared.state.lock().pending.drain(..).collect();
            if drained.is_empty() {
                break;
            }
            total += drained.len();
            for object in drained {
                object.teardown();
            }
        }

        debug!(drained = total, "deletion queue shut down");
        total
    }

    fn enqueue(&self, object: Box<dyn Teardown>) -> Result<(), Box<dyn Teardown>> {
        let mut state = self.shared.state.lock();
        if state.closed {
            return Err(object);
        }

        state.pending.push_back(object);
        let pending = state.pending.len();
        if pending >= self.shared.config.pending_warn_threshold && !state.warned {
            state.warned = true;
            warn!(
                pending,
                threshold = self.shared.config.pending_warn_threshold,
                "deferred deletion backlog growing; is the owning loop running?"
            );
        }
        Ok(())
    }
}

impl Default for DeletionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletionScheduler for DeletionQueue {
    fn schedule_deferred_destroy(&self, object: Box<dyn Teardown>) {
        if let Err(object) = self.enqueue(object) {
            warn!("deletion queue closed; tearing object down immediately");
            object.teardown();
        }
    }
}

/// Scheduler handle that does not keep its queue alive
///
/// Once every [`DeletionQueue`] handle is gone, scheduled objects are torn
/// down immediately.
#[derive(Clone)]
pub struct WeakDeletionQueue {
    shared: Weak<QueueShared>,
}

impl WeakDeletionQueue {
    /// Strong handle, if the queue still exists
    pub fn upgrade(&self) -> Option<DeletionQueue> {
        self.shared.upgrade().map(|shared| DeletionQueue { shared })
    }
}

impl DeletionScheduler for WeakDeletionQueue {
    fn schedule_deferred_destroy(&self, object: Box<dyn Teardown>) {
        match self.upgrade() {
            Some(queue) => queue.schedule_deferred_destroy(object),
            None => {
                debug!("deletion queue dropped; tearing object down immediately");
                object.teardown();
            }
        }
    }
}

impl fmt::Debug for WeakDeletionQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakDeletionQueue")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

impl fmt::Debug for DeletionQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("DeletionQueue")
            .field("pending", &state.pending.len())
            .field("closed", &state.closed)
            .field("config", &self.shared.config)
            .finish()
    }
}
