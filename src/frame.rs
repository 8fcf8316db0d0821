/// Borrowed frame views delivered by the engine.
pub mod raw;
/// The session-scoped reusable copy buffer.
pub mod scratch;
