use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Lets only the last of a burst of events through.
///
/// Each event arms a new token; when its delay elapses the event is applied
/// only if no later event re-armed the gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebounceGate {
    latest: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }

    /// Invalidates every armed token.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }
}

/// Debounced callback returned by `use_debounced`.
pub struct Debounced<T: 'static> {
    gate: StoredValue<DebounceGate>,
    delay_ms: u32,
    on_settle: Callback<T>,
}

impl<T: 'static> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Debounced<T> {}

impl<T: 'static> Debounced<T> {
    /// Runs `on_settle` with `value` once `delay_ms` pass without another call.
    pub fn call(&self, value: T) {
        let Some(token) = self.gate.try_update_value(|g| g.arm()) else {
            return;
        };
        if self.delay_ms == 0 {
            self.on_settle.run(value);
            return;
        }
        let gate = self.gate;
        let on_settle = self.on_settle;
        let delay_ms = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if gate.try_with_value(|g| g.is_current(token)).unwrap_or(false) {
                on_settle.run(value);
            }
        });
    }

    /// Drops whatever is pending and runs `on_settle` now.
    pub fn flush(&self, value: T) {
        self.gate.try_update_value(|g| g.cancel());
        self.on_settle.run(value);
    }
}

/// Wraps `on_settle` so it runs `delay_ms` after the last call only.
pub fn use_debounced<T: 'static>(delay_ms: u32, on_settle: Callback<T>) -> Debounced<T> {
    Debounced {
        gate: StoredValue::new(DebounceGate::default()),
        delay_ms,
        on_settle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_token_fires() {
        let mut gate = DebounceGate::default();
        let a = gate.arm();
        let b = gate.arm();
        let c = gate.arm();
        assert!(!gate.is_current(a));
        assert!(!gate.is_current(b));
        assert!(gate.is_current(c));
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut gate = DebounceGate::default();
        let a = gate.arm();
        gate.cancel();
        assert!(!gate.is_current(a));
    }
}
