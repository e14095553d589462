/// Marker trait for intents.
///
/// Anything time-dependent (activity timestamps, request ids) travels
/// inside the intent so that reducers stay deterministic.
pub trait Intent: Send + 'static {}
