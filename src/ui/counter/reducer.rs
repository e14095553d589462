use crate::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::{CounterViewState, NthPrimeAlert, PendingLookup};

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterViewState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::ShowPrimeModal => CounterViewState {
                prime_modal_shown: true,
                ..state
            },
            CounterIntent::DismissPrimeModal => CounterViewState {
                prime_modal_shown: false,
                ..state
            },
            CounterIntent::LookupStarted { request_id, n } => {
                if state.is_lookup_in_flight() {
                    return state;
                }
                CounterViewState {
                    pending_lookup: Some(PendingLookup { request_id, n }),
                    ..state
                }
            }
            CounterIntent::LookupFinished { request_id, prime } => match state.pending_lookup {
                Some(pending) if pending.request_id == request_id => CounterViewState {
                    pending_lookup: None,
                    nth_prime_alert: Some(NthPrimeAlert {
                        n: pending.n,
                        prime,
                    }),
                    ..state
                },
                // Stale or unknown request: the requester is gone.
                _ => state,
            },
            CounterIntent::DismissAlert => CounterViewState {
                nth_prime_alert: None,
                ..state
            },
            CounterIntent::Leave => CounterViewState::default(),
        }
    }
}
