/// UI-side fold of session events into view state.
pub mod model;
/// Published state snapshots and observers.
pub mod view;
