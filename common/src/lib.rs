//! Shared model for the netprobe workspace.
//!
//! * **[`network`]**: interfaces, address records, the [`Status`](network::status::Status)
//!   verdict and the [`InterfaceProvider`](network::interface::InterfaceProvider) capability.
//! * **[`error`]**: the single recoverable failure, an address lookup that did not resolve.
//! * **[`config`]**: runtime options handed from the CLI to the prober.
//! * **[`utils`]**: helpers over address record lists.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;
