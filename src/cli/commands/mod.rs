//! Command implementations for the solver CLI

pub mod export;
pub mod play;
pub mod solve;
