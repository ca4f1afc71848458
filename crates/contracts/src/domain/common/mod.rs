//! Common types and traits shared by every resource

pub mod identified;
pub mod wire;

// Re-exports
pub use identified::Identified;
