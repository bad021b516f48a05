//! Testing utilities for tripflow pipelines.
//!
//! This module provides model client stubs that never touch the network:
//! - [`FixedModelClient`] answers every prompt with the same text
//! - [`EchoModelClient`] answers with the prompt itself
//! - [`ScriptedModelClient`] records prompts and can fail on a chosen call

mod mocks;

pub use mocks::{EchoModelClient, FixedModelClient, ScriptedModelClient};
