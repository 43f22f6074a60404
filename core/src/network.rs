//! Concrete [`Prober`](crate::prober::Prober) implementations.

pub mod ping;
pub mod tcp;

pub use ping::PingProber;
pub use tcp::TcpProber;
