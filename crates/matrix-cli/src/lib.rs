//! Library half of the `matrix-cli` binary: input loading, operation dispatch
//! and output rendering, kept here so they can be tested without spawning
//! the binary.
pub mod commands;
