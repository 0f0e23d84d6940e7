/// Marker trait for view state.
///
/// A state value holds everything needed to render its view. `Default`
/// is the state before the first load.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
