//! Clause 22 (legacy MII) register-access record
//!
//! | Offset | Field | Type |
//! |--------|-------|------|
//! | 0 | PHY address | u8 (5 bits significant) |
//! | 1 | Page | u8 |
//! | 2 | Register address | u16 LE (5 bits significant) |
//! | 4 | Register value | u16 LE |

use crate::constants::{CLAUSE22_MESSAGE_SIZE, MAX_C22_REG_ADDR, MAX_PHY_ADDR};
use crate::error::{ConfigError, ConfigResult};

/// Direct register access on a Clause 22 PHY
///
/// Every byte is carried verbatim; use [`validate`](Self::validate) to check
/// address ranges before sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clause22Message {
    /// PHY address on the MDIO bus
    pub phy_addr: u8,
    /// Vendor register page
    pub page: u8,
    /// Register address
    pub reg_addr: u16,
    /// Register value (written value, or read result)
    pub reg_val: u16,
}

impl Clause22Message {
    /// Create a record for `reg_addr` on `phy_addr`, page 0
    pub const fn new(phy_addr: u8, reg_addr: u16, reg_val: u16) -> Self {
        Self {
            phy_addr,
            page: 0,
            reg_addr,
            reg_val,
        }
    }

    /// Set the page
    #[must_use]
    pub const fn with_page(mut self, page: u8) -> Self {
        self.page = page;
        self
    }

    /// Check that the addresses fit their 5-bit fields
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.phy_addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress);
        }
        if self.reg_addr > MAX_C22_REG_ADDR {
            return Err(ConfigError::InvalidRegisterAddress);
        }
        Ok(())
    }

    /// Same PHY, page and register as `other` (value ignored)
    pub const fn same_target(&self, other: &Self) -> bool {
        self.phy_addr == other.phy_addr && self.page == other.page && self.reg_addr == other.reg_addr
    }

    /// Serialize into the wire layout
    pub const fn to_bytes(&self) -> [u8; CLAUSE22_MESSAGE_SIZE] {
        let reg = self.reg_addr.to_le_bytes();
        let val = self.reg_val.to_le_bytes();
        [self.phy_addr, self.page, reg[0], reg[1], val[0], val[1]]
    }

    /// Parse from the wire layout
    pub const fn from_bytes(bytes: &[u8; CLAUSE22_MESSAGE_SIZE]) -> Self {
        Self {
            phy_addr: bytes[0],
            page: bytes[1],
            reg_addr: u16::from_le_bytes([bytes[2], bytes[3]]),
            reg_val: u16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}
