// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    last_call: Duration,
    value: T,
}

/// Collapses bursts of calls into the last one once a quiet window has passed.
///
/// Time is whatever monotonic offset the caller supplies, so the same logic
/// runs under a terminal poll loop or a test clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    pub fn call(&mut self, now: Duration, value: T) {
        self.pending = Some(Pending {
            last_call: now,
            value,
        });
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.last_call.saturating_add(self.delay))
    }

    pub fn poll(&mut self, now: Duration) -> Option<T> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DEBOUNCE, Debouncer};
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fires_once_after_quiet_window() {
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.call(ms(0), "pika");

        assert_eq!(debouncer.poll(ms(299)), None);
        assert_eq!(debouncer.poll(ms(300)), Some("pika"));
        assert_eq!(debouncer.poll(ms(900)), None);
    }

    #[test]
    fn later_call_replaces_value_and_restarts_window() {
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.call(ms(0), "p");
        debouncer.call(ms(200), "pi");

        assert_eq!(debouncer.deadline(), Some(ms(500)));
        assert_eq!(debouncer.poll(ms(400)), None);
        assert_eq!(debouncer.poll(ms(500)), Some("pi"));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut debouncer = Debouncer::<&str>::default();
        assert_eq!(debouncer.delay(), DEFAULT_DEBOUNCE);

        debouncer.call(ms(10), "x");
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(ms(10_000)), None);
    }
}
