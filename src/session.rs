/// Typed worker-to-UI session events.
pub mod events;
/// The render orchestrator and its worker loop.
pub mod orchestrator;
