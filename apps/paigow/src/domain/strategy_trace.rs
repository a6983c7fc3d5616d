//! Trace sinks for the house-way strategy.
//!
//! Strategy functions take a `&dyn StrategyTrace` so callers choose where the
//! decision steps go: nowhere, the `tracing` subscriber, or an in-memory log.

use parking_lot::Mutex;
use tracing::debug;

/// One decision taken by the strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyEvent {
    /// Two pairs present; kept together.
    TwoPairs { partition: usize },
    /// Single pair kept together by the forced rules.
    KeepPair { pair: char, partition: usize },
    /// Single pair split by the forced rules.
    SplitPair { pair: char, partition: usize },
    /// Candidate dominates every other one.
    OnlyWay { candidate: usize },
    /// Candidate is dominated by another and dropped.
    Eliminated { candidate: usize, by: usize },
    /// Candidate chosen among survivors by a comparator stage (`"tie"` when
    /// every stage passed and the earlier candidate was kept).
    Picked {
        candidate: usize,
        comparator: &'static str,
        stage: &'static str,
    },
}

pub trait StrategyTrace: Send + Sync {
    fn record(&self, event: StrategyEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl StrategyTrace for NoTrace {
    fn record(&self, _event: StrategyEvent) {}
}

/// Emits each event as a `tracing` debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTrace;

impl StrategyTrace for TracingTrace {
    fn record(&self, event: StrategyEvent) {
        debug!(?event, "house way step");
    }
}

/// Keeps events in memory.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    events: Mutex<Vec<StrategyEvent>>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StrategyEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl StrategyTrace for RecordingTrace {
    fn record(&self, event: StrategyEvent) {
        self.events.lock().push(event);
    }
}
