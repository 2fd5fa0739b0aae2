/// Marker trait for screen state.
///
/// States are cloned values, compared with `PartialEq` to detect changes,
/// and start from `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
