//! Hardware Access Layer
//!
//! This module connects the packet codec to a device. The transport that
//! moves bytes is supplied by the caller; the client turns register reads
//! and writes into packet transactions over it.
//!
//! # Modules
//!
//! - [`transport`]: The transport contract ([`PhyRegTransport`])
//! - [`mdio`]: Clause 22 / Clause 45 bus traits and PHY helpers
//! - [`client`]: Packet-based register client ([`PhyRegClient`])
//!
//! # Delay Integration
//!
//! Response polling uses `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod client;
pub mod mdio;
pub mod transport;

// Re-export commonly used types
pub use client::PhyRegClient;
pub use mdio::{MdioBus, MmdBus, modify, modify_mmd, read_mmd_id, read_phy_id};
pub use transport::PhyRegTransport;
