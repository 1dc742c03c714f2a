//! HTTP handlers. Each handler is a thin wrapper calling exactly one
//! service method and returning the result as JSON.

pub mod debate;
pub mod diagnostics;
pub mod lyrics;
pub mod rappers;
pub mod speech;
pub mod topics;
pub mod translation;
