/// Marker trait for intents.
///
/// An intent is either a user action (page change, form edit, submit) or
/// the outcome of a request (loaded, failed, succeeded).
pub trait Intent: Send + 'static {}
