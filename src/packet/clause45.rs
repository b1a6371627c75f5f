//! Clause 45 (MMD/indirect) register-access record
//!
//! | Offset | Field | Type |
//! |--------|-------|------|
//! | 0 | Port (PHY) address | u8 (5 bits significant) |
//! | 1 | MMD device address | u8 (5 bits significant) |
//! | 2 | Register address | u16 LE |
//! | 4 | Register value | u16 LE |

use crate::constants::{CLAUSE45_MESSAGE_SIZE, MAX_MMD_DEVICE, MAX_PHY_ADDR};
use crate::error::{ConfigError, ConfigResult};

/// Indirect register access in a Clause 45 MMD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clause45Message {
    /// Port (PHY) address on the MDIO bus
    pub port: u8,
    /// MMD device address
    pub device: u8,
    /// Register address within the MMD
    pub reg_addr: u16,
    /// Register value (written value, or read result)
    pub reg_val: u16,
}

impl Clause45Message {
    /// Create a record for `reg_addr` in MMD `device` behind `port`
    pub const fn new(port: u8, device: u8, reg_addr: u16, reg_val: u16) -> Self {
        Self {
            port,
            device,
            reg_addr,
            reg_val,
        }
    }

    /// Check that port and device fit their 5-bit fields
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.port > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress);
        }
        if self.device > MAX_MMD_DEVICE {
            return Err(ConfigError::InvalidDeviceAddress);
        }
        Ok(())
    }

    /// Same port, device and register as `other` (value ignored)
    pub const fn same_target(&self, other: &Self) -> bool {
        self.port == other.port && self.device == other.device && self.reg_addr == other.reg_addr
    }

    /// Serialize into the wire layout
    pub const fn to_bytes(&self) -> [u8; CLAUSE45_MESSAGE_SIZE] {
        let reg = self.reg_addr.to_le_bytes();
        let val = self.reg_val.to_le_bytes();
        [self.port, self.device, reg[0], reg[1], val[0], val[1]]
    }

    /// Parse from the wire layout
    pub const fn from_bytes(bytes: &[u8; CLAUSE45_MESSAGE_SIZE]) -> Self {
        Self {
            port: bytes[0],
            device: bytes[1],
            reg_addr: u16::from_le_bytes([bytes[2], bytes[3]]),
            reg_val: u16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}
