//! IEEE 802.3 PHY Register Addresses
//!
//! Well-known addresses for building packets. The codec itself never
//! interprets them.
//!
//! # Clause 22
//!
//! 32 registers (0-31) per PHY. Registers 0-15 are standardized, 16-31 are
//! vendor-specific.
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 4 | ANAR | Auto-Negotiation Advertisement |
//! | 5 | ANLPAR | Link Partner Ability |
//! | 6 | ANER | Auto-Negotiation Expansion |
//! | 13 | MMD_CTRL | MMD Access Control |
//! | 14 | MMD_DATA | MMD Access Address/Data |
//! | 15 | ESTATUS | Extended Status |
//!
//! # Clause 45
//!
//! Up to 32 MMDs per port, each with a 16-bit register space.

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod c22 {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u8 = 6;
    /// Auto-Negotiation Next Page Transmit Register
    pub const ANNPTR: u8 = 7;
    /// Auto-Negotiation Next Page Receive Register
    pub const ANNPRR: u8 = 8;
    /// 1000BASE-T Control Register
    pub const GBCR: u8 = 9;
    /// 1000BASE-T Status Register
    pub const GBSR: u8 = 10;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

/// MMD device addresses (IEEE 802.3 Clause 45)
pub mod mmd {
    /// PMA/PMD
    pub const PMA_PMD: u8 = 1;
    /// WIS
    pub const WIS: u8 = 2;
    /// PCS
    pub const PCS: u8 = 3;
    /// PHY XS
    pub const PHY_XS: u8 = 4;
    /// DTE XS
    pub const DTE_XS: u8 = 5;
    /// Auto-Negotiation
    pub const AN: u8 = 7;
    /// Clause 22 extension
    pub const C22_EXT: u8 = 29;
    /// Vendor specific 1
    pub const VENDOR_1: u8 = 30;
    /// Vendor specific 2
    pub const VENDOR_2: u8 = 31;
}

/// Registers common to every MMD (IEEE 802.3 Clause 45)
pub mod mmd_reg {
    /// Control 1
    pub const CTRL1: u16 = 0x0000;
    /// Status 1
    pub const STAT1: u16 = 0x0001;
    /// Device Identifier 1
    pub const DEVID1: u16 = 0x0002;
    /// Device Identifier 2
    pub const DEVID2: u16 = 0x0003;
    /// Devices in Package 1
    pub const DEVS1: u16 = 0x0005;
    /// Devices in Package 2
    pub const DEVS2: u16 = 0x0006;
    /// BASE-T1 PMA/PMD control (PMA/PMD MMD only)
    pub const PMA_BT1_CTRL: u16 = 0x0834;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_C22_REG_ADDR, MAX_MMD_DEVICE};

    #[test]
    fn clause22_addresses_fit_five_bits() {
        for reg in [c22::BMCR, c22::BMSR, c22::ANLPAR, c22::MMD_DATA, c22::ESTATUS] {
            assert!(reg as u16 <= MAX_C22_REG_ADDR);
        }
    }

    #[test]
    fn mmd_devices_fit_five_bits() {
        for dev in [mmd::PMA_PMD, mmd::PCS, mmd::AN, mmd::VENDOR_2] {
            assert!(dev <= MAX_MMD_DEVICE);
        }
    }
}
