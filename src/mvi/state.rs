/// Marker trait for reducer-owned state.
///
/// `PartialEq` lets callers skip redraws when a reduction was a no-op.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
