//! Page-wide "online / updating" indicator driven by the in-flight request count.

/// Mode rendered by the status chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusMode {
    /// No request in flight.
    #[default]
    Idle,
    /// At least one request in flight.
    Busy,
}

impl StatusMode {
    /// Translation key for the chip label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Idle => "status.online",
            Self::Busy => "status.updating",
        }
    }
}

/// In-flight request counter.
///
/// Mutated only from the single UI thread; `end` saturates so a stray
/// decrement can never wrap the counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StatusSignal {
    in_flight: u32,
}

impl StatusSignal {
    /// Record a request start.
    pub fn begin(&mut self) {
        self.in_flight = self.in_flight.saturating_add(1);
    }

    /// Record a request completion (success or failure).
    pub fn end(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Number of requests currently in flight.
    #[must_use]
    pub const fn in_flight(self) -> u32 {
        self.in_flight
    }

    /// Mode derived from the counter.
    #[must_use]
    pub const fn mode(self) -> StatusMode {
        if self.in_flight > 0 {
            StatusMode::Busy
        } else {
            StatusMode::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_while_any_request_in_flight() {
        let mut signal = StatusSignal::default();
        assert_eq!(signal.mode(), StatusMode::Idle);
        signal.begin();
        signal.begin();
        signal.end();
        assert_eq!(signal.mode(), StatusMode::Busy);
        signal.end();
        assert_eq!(signal.mode(), StatusMode::Idle);
    }

    #[test]
    fn end_saturates_at_zero() {
        let mut signal = StatusSignal::default();
        signal.end();
        assert_eq!(signal.in_flight(), 0);
        assert_eq!(signal.mode().label_key(), "status.online");
    }
}
