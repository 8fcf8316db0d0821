/// Trait boundary to the external rendering engine.
pub mod contract;
/// Built-in demo engine with a fixed scene catalog.
pub mod demo;
