//! Hybrid logical clock
//!
//! A [`Clock`] owns the latest [`Timestamp`] issued by one node and the
//! [`TimeSource`] it reads physical time from. Every operation reads the
//! source once, feeds the reading through the timestamp algebra and stores
//! the result.
//!
//! # Concurrency
//!
//! Mutating operations take `&mut self` and the clock does no locking of
//! its own. A clock shared between threads must sit behind whatever the
//! caller already uses to serialize access, e.g. a `Mutex<Clock<_>>` or a
//! single owning task fed through a channel.

use core::fmt;

use tracing::{debug, trace};

use crate::source::TimeSource;
use crate::timestamp::Timestamp;

/// Node identifier type
pub type NodeId = u64;

/// Hybrid logical clock for a single node
///
/// Produces a strictly increasing sequence of timestamps for local events
/// and folds in timestamps received from other nodes so that every local
/// timestamp sorts after anything this node has observed.
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let time_a = ManualClock::new(1_000);
/// let time_b = ManualClock::new(900); // node B lags behind
///
/// let mut a = Clock::new(1, &time_a);
/// let mut b = Clock::new(2, &time_b);
///
/// // A stamps an outgoing message.
/// let sent = a.tick();
///
/// // B receives it; its own reading is older, so it adopts A's time.
/// let received = b.observe(sent);
/// assert!(received > sent);
/// assert_eq!(sent, Timestamp::new(1_000, 1));
/// assert_eq!(received, Timestamp::new(1_000, 2));
/// ```
#[derive(Debug)]
pub struct Clock<S> {
    /// Source of physical time readings
    source: S,
    /// Latest timestamp issued by this clock
    latest: Timestamp,
    /// Identifier supplied at construction
    node_id: NodeId,
}

impl<S: TimeSource> Clock<S> {
    /// Creates a clock reading `source` once for its starting timestamp
    ///
    /// The clock starts at `(source.now(), 0)`.
    ///
    /// `node_id` is kept for the caller's bookkeeping only. It is not part
    /// of a [`Timestamp`] and never takes part in ordering, so two nodes can
    /// issue equal timestamps.
    pub fn new(node_id: NodeId, source: S) -> Self {
        let latest = Timestamp::new(source.now(), 0);
        trace!(node_id, %latest, "clock started");
        Self {
            source,
            latest,
            node_id,
        }
    }

    /// Records a local event
    ///
    /// The next [`snapshot`](Self::snapshot) sorts strictly after the
    /// previous one (modulo counter wraparound).
    pub fn increment(&mut self) {
        let observed = self.source.now();
        if observed <= self.latest.physical() {
            debug!(
                node_id = self.node_id,
                observed,
                latest = self.latest.physical(),
                "physical time did not advance"
            );
        }
        self.latest.advance(observed);
        trace!(node_id = self.node_id, latest = %self.latest, "local event");
    }

    /// Folds a timestamp received from another node into this clock
    ///
    /// Afterwards the clock sorts strictly after both its previous value and
    /// `remote`.
    pub fn merge(&mut self, remote: Timestamp) {
        let observed = self.source.now();
        if remote.physical() > observed {
            debug!(
                node_id = self.node_id,
                observed,
                remote = remote.physical(),
                "remote timestamp ahead of local physical time"
            );
        }
        self.latest.merge(observed, remote);
        trace!(node_id = self.node_id, %remote, latest = %self.latest, "merged remote");
    }

    /// Records a local event and returns its timestamp
    ///
    /// Shorthand for [`increment`](Self::increment) followed by
    /// [`snapshot`](Self::snapshot); use it to stamp outgoing messages.
    pub fn tick(&mut self) -> Timestamp {
        self.increment();
        self.latest
    }

    /// Merges `remote` and returns the resulting timestamp
    ///
    /// Shorthand for [`merge`](Self::merge) followed by
    /// [`snapshot`](Self::snapshot); use it to stamp a receive event.
    pub fn observe(&mut self, remote: Timestamp) -> Timestamp {
        self.merge(remote);
        self.latest
    }
}

impl<S> Clock<S> {
    /// Returns a copy of the latest timestamp
    ///
    /// The copy is independent of the clock; later clock operations do not
    /// change it.
    pub fn snapshot(&self) -> Timestamp {
        self.latest
    }

    /// Returns the identifier supplied at construction
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Returns the time source
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> fmt::Display for Clock<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.latest, f)
    }
}
