//! Execution budget primitives - sentinels, shared counters, cooperative yield
//!
//! A search run bounds its total work in time (nanoseconds) or individuals
//! evaluated. Workers draw down a shared [`BudgetCounter`]; "no limit" is the
//! sentinel value, not a special case, so ordinary arithmetic and comparisons
//! need no is-there-a-limit branch.
//!
//! The sentinels sit roughly three orders of magnitude above any realistic
//! measured quantity while staying far below `i64::MAX`, so sums and
//! differences mixing a sentinel with real measurements cannot overflow.

use crate::types::Integer;
use std::sync::atomic::{AtomicI64, Ordering};
use std::thread;

pub const NANOS_PER_SECOND: Integer = 1_000_000_000;
pub const NANOS_PER_MICRO: Integer = 1_000;

/// "No time limit" sentinel, in nanoseconds. About three years.
pub const UNLIMITED_TIME: Integer = 100_000_000_000_000_000;

/// "No individual-count limit" sentinel. A quadrillion.
pub const UNLIMITED_INDIVIDUALS: Integer = 1_000_000_000_000_000;

/// Cross-worker shared budget counter.
///
/// Carries no unit semantics of its own; callers agree out-of-band whether it
/// counts nanoseconds, seconds, or individuals. Pass a reference (or `Arc`) to
/// every worker drawing from the same budget.
///
/// Only commutative decrements and snapshot reads are offered, so `Relaxed`
/// atomics are the whole synchronization story; no lock is needed.
#[derive(Debug)]
pub struct BudgetCounter {
    remaining: AtomicI64,
}

impl BudgetCounter {
    /// Counter starting at `initial` (a finite budget or a sentinel).
    pub fn new(initial: Integer) -> Self {
        Self {
            remaining: AtomicI64::new(initial),
        }
    }

    /// Snapshot of the remaining budget. May go negative once workers
    /// overdraw concurrently; exhaustion checks treat that as spent.
    pub fn remaining(&self) -> Integer {
        self.remaining.load(Ordering::Relaxed)
    }

    /// Atomically draw `amount` from the budget, returning what remains
    /// after this draw.
    pub fn consume(&self, amount: Integer) -> Integer {
        self.remaining.fetch_sub(amount, Ordering::Relaxed) - amount
    }

    /// Whether the budget has been fully drawn down.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() <= 0
    }
}

/// Let other workers on this core run.
///
/// Voluntarily gives up the rest of the scheduling quantum. Intended for
/// busy-wait loops polling a shared counter; it yields the processor without
/// waiting on any condition itself.
pub fn chill() {
    thread::yield_now();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sentinels_leave_overflow_headroom() {
        // A week of nanoseconds is a generous bound on any real measurement.
        let realistic: Integer = 7 * 24 * 3600 * NANOS_PER_SECOND;
        assert!(UNLIMITED_TIME.checked_add(realistic).is_some());
        assert!(UNLIMITED_INDIVIDUALS.checked_add(realistic).is_some());
        assert!(UNLIMITED_TIME > realistic);
    }

    #[test]
    fn test_consume_returns_remaining() {
        let counter = BudgetCounter::new(100);
        assert_eq!(counter.consume(30), 70);
        assert_eq!(counter.consume(70), 0);
        assert!(counter.is_exhausted());
    }

    #[test]
    fn test_unlimited_budget_not_exhausted_by_real_work() {
        let counter = BudgetCounter::new(UNLIMITED_INDIVIDUALS);
        counter.consume(1_000_000);
        assert!(!counter.is_exhausted());
    }

    #[test]
    fn test_concurrent_draws_account_exactly() {
        let counter = Arc::new(BudgetCounter::new(8 * 1000));
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        counter.consume(1);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(counter.remaining(), 0);
        assert!(counter.is_exhausted());
    }

    #[test]
    fn test_chill_returns() {
        chill();
    }
}
