//! Application events broadcast to connected observers.

pub mod debate;

pub use debate::DebateSnapshot;
