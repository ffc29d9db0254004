//! # netprobe core
//!
//! Decides whether the host currently has network connectivity.
//!
//! * **[`probe`]**: the classification routine and its [`Report`](probe::Report).
//! * **[`system`]**: the live [`InterfaceProvider`](netprobe_common::network::interface::InterfaceProvider)
//!   backed by the operating system.
//! * **[`snapshot`]**: a fixed interface table, captured once or built by hand.

pub mod probe;
pub mod snapshot;
pub mod system;

pub use probe::{check_network_status, check_network_status_with};
