//! PHY Register Access Packets
//!
//! A `no_std`, `no_alloc` encoder/decoder for the fixed-size packet used to
//! command a hardware interface to read or write a register on an Ethernet
//! PHY over MDIO.
//!
//! # Architecture
//!
//! The crate is organized into two layers:
//!
//! 1. **Packet Layer** ([`packet`]): wire layout, [`encode`](packet::encode)
//!    and [`decode`](packet::decode), batches
//! 2. **Access Layer** ([`hal`]): transport contract and a register client
//!    that runs packet transactions
//!
//! # Packet Layout
//!
//! ```text
//! Offset 0 : ControlWord   (16 bits, little-endian)
//! Offset 2 : RegisterBody  (6 bytes: Clause 22 or Clause 45 record)
//! ```
//!
//! The control word's Clause 45 bit is the only thing that decides which
//! record the body holds. [`PhyRegPkt`] keeps the bit and the body variant
//! consistent; decoding never exposes the record that was not selected.
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 22**: direct MII register access (5-bit PHY and register addresses)
//! - **IEEE 802.3 Clause 45**: MMD register access (5-bit port and device, 16-bit register)
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types and transaction logging
//!
//! # Example
//!
//! ```
//! use ph_phy_reg_pkt::{ControlWord, PhyRegPkt, RegisterBody, Clause45Message, packet};
//!
//! let control = ControlWord::new()
//!     .with_enabled(true)
//!     .with_write_enable(true)
//!     .with_clause45_enable(true)
//!     .with_bus_index(1)
//!     .with_version(1);
//! let body = RegisterBody::Clause45(Clause45Message::new(0, 1, 0x0834, 0xC001));
//!
//! let bytes = packet::encode(control, body).unwrap();
//! assert_eq!(bytes.len(), ph_phy_reg_pkt::constants::PHY_REG_PKT_SIZE);
//!
//! let pkt = PhyRegPkt::decode(&bytes).unwrap();
//! assert_eq!(pkt.into_parts(), (control, body));
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod constants;
pub mod error;
pub mod hal;
pub mod packet;
pub mod regs;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ClientConfig;
pub use error::{
    ConfigError, ConfigResult, Error, IoError, IoResult, PacketError, PacketResult, Result,
};
pub use hal::{MdioBus, MmdBus, PhyRegClient, PhyRegTransport};
pub use packet::{
    Clause22Message, Clause45Message, ControlFields, ControlWord, PhyRegPkt, RegisterBody,
};
