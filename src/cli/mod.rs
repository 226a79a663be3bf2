//! CLI infrastructure for the solver
//!
//! This module provides the command-line interface for analyzing
//! positions, exporting the full policy, and playing against the engine.

pub mod commands;
pub mod output;
