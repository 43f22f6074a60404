//! End-to-end tests across the workspace crates: list text in, partition out.
mod sweep;
