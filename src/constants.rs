//! Centralized Constants
//!
//! This module provides a single source of truth for the sizes, limits and
//! default settings used by the packet codec and the register client.
//!
//! # Organization
//!
//! Constants are grouped by category:
//! - **Packet sizes**: wire dimensions of the packet and its parts
//! - **Limits**: batch size and address ranges
//! - **Timing**: response timeout and polling interval
//! - **Defaults**: protocol version, bus index, page
//!
//! # Note
//!
//! Control word bit positions live in `internal::control_bits`, since they
//! describe one specific word layout.

// =============================================================================
// Packet Sizes
// =============================================================================

/// Size of the control word in bytes
pub const CONTROL_WORD_SIZE: usize = 2;

/// Size of a Clause 22 register-access record in bytes
pub const CLAUSE22_MESSAGE_SIZE: usize = 6;

/// Size of a Clause 45 register-access record in bytes
pub const CLAUSE45_MESSAGE_SIZE: usize = 6;

/// Size of the register body (the larger of the two records)
pub const REGISTER_BODY_SIZE: usize = if CLAUSE22_MESSAGE_SIZE > CLAUSE45_MESSAGE_SIZE {
    CLAUSE22_MESSAGE_SIZE
} else {
    CLAUSE45_MESSAGE_SIZE
};

/// Total size of one PHY register packet on the wire
pub const PHY_REG_PKT_SIZE: usize = CONTROL_WORD_SIZE + REGISTER_BODY_SIZE;

// =============================================================================
// Limits
// =============================================================================

/// Maximum number of packets exchanged in one batch
pub const MAX_PHY_REG_PKT_ENTRIES: usize = 128;

/// Size of the largest batch buffer
pub const MAX_BATCH_SIZE: usize = MAX_PHY_REG_PKT_ENTRIES * PHY_REG_PKT_SIZE;

/// Maximum valid PHY (port) address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid Clause 22 register address (5-bit field)
pub const MAX_C22_REG_ADDR: u16 = 31;

/// Maximum valid MMD device address (5-bit field)
pub const MAX_MMD_DEVICE: u8 = 31;

/// Maximum valid MDIO bus index (4-bit field)
pub const MAX_BUS_INDEX: u8 = 15;

/// Maximum valid packet version (4-bit field)
pub const MAX_VERSION: u8 = 15;

// =============================================================================
// Timing Constants
// =============================================================================

/// Default time to wait for a completed response, in microseconds
pub const DEFAULT_RESPONSE_TIMEOUT_US: u32 = 100_000;

/// Default interval between response polls, in microseconds
pub const DEFAULT_POLL_INTERVAL_US: u32 = 100;

// =============================================================================
// Default Configuration
// =============================================================================

/// Packet format version written by this crate
pub const PHY_REG_PKT_VERSION: u8 = 1;

/// Default MDIO bus index
pub const DEFAULT_BUS_INDEX: u8 = 0;

/// Default Clause 22 page
pub const DEFAULT_PAGE: u8 = 0;

// =============================================================================
// Unit Tests
// =============================================================================
