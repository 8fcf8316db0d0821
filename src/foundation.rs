/// Core value types.
pub mod core;
/// Crate error taxonomy.
pub mod error;
