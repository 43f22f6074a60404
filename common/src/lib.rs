//! # Sweepr Common
//!
//! Shared models for the `sweepr` workspace.
//!
//! * **[`network`]**: IPv4 ranges, address specifications and the address-list reader.
//! * **[`config`]**: The [`config::ProbePolicy`] handed to every probe session.
//! * **[`error`]**: Typed errors for parsing and configuration problems.

pub mod config;
pub mod error;
pub mod network;
