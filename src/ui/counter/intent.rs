use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CounterIntent {
    ShowPrimeModal,
    DismissPrimeModal,
    /// A lookup for the `n`th prime was sent. Ignored while another is pending.
    LookupStarted { request_id: u64, n: i64 },
    /// A lookup finished. Ignored unless `request_id` is the pending one.
    LookupFinished { request_id: u64, prime: Option<i64> },
    DismissAlert,
    /// The screen was left; pending lookups are forgotten.
    Leave,
}

impl Intent for CounterIntent {}
