//! View-local state of the counter screen.
//!
//! Nothing here lives in the application store: it is reset whenever the
//! screen is left.

use crate::mvi::UiState;

/// A lookup that has been sent and not yet answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLookup {
    pub request_id: u64,
    pub n: i64,
}

/// Answer to show in the nth-prime alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthPrimeAlert {
    pub n: i64,
    /// `None` when the lookup produced no usable value.
    pub prime: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterViewState {
    pub prime_modal_shown: bool,
    pub pending_lookup: Option<PendingLookup>,
    pub nth_prime_alert: Option<NthPrimeAlert>,
}

impl UiState for CounterViewState {}

impl CounterViewState {
    /// The nth-prime action stays disabled while a lookup is in flight.
    pub fn is_lookup_in_flight(&self) -> bool {
        self.pending_lookup.is_some()
    }

    pub fn is_alert_shown(&self) -> bool {
        self.nth_prime_alert.is_some()
    }

    /// Whether a result tagged with `request_id` is still awaited.
    pub fn awaits(&self, request_id: u64) -> bool {
        self.pending_lookup
            .is_some_and(|pending| pending.request_id == request_id)
    }
}
