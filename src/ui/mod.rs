//! View state for the console: per-view reducers, dialogs and the
//! controllers that sync them with the backend.

pub mod advices;
pub mod app;
pub mod briefs;
pub mod campaigns;
pub mod collection;
pub mod decisions;
pub mod dialog;
pub mod mvi;
pub mod runtime;

pub use app::Console;
