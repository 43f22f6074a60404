//! # Sweepr Core
//!
//! Reachability sweeps over IPv4 address lists.
//!
//! * **[`classifier`]**: reads one probe's raw outcome as success or failure.
//! * **[`campaign`]**: the per-address decision state machine.
//! * **[`scanner`]**: the bounded-concurrency orchestrator.
//! * **[`prober`]**: the port every transport implements.
//! * **[`network`]**: transports (`ping` subprocess, TCP handshake).

pub mod campaign;
pub mod classifier;
pub mod network;
pub mod prober;
pub mod scanner;

pub use campaign::{CampaignVerdict, Verdict};
pub use prober::{ProbeReport, Prober};
pub use scanner::{SweepError, SweepResult, perform_sweep, sweep};
