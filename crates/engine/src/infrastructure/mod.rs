//! Infrastructure implementations.
//!
//! Contains port trait implementations for the upstream services plus the
//! engine's configuration.

pub mod catfact;
pub mod config;
pub mod hiscores;
pub mod ports;
pub mod templeosrs;
pub mod upstream;
