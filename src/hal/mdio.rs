//! MDIO bus traits
//!
//! Register-level access to PHYs, independent of how the access is carried
//! out. [`PhyRegClient`](super::PhyRegClient) implements both traits by
//! exchanging packets with the device.

use crate::error::Result;
use crate::regs::{c22, mmd_reg};

// =============================================================================
// Bus Traits
// =============================================================================

/// Clause 22 (direct) register access
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

/// Clause 45 (MMD) register access
pub trait MmdBus {
    /// Read a register in MMD `device` behind `port`
    fn read_mmd(&mut self, port: u8, device: u8, reg_addr: u16) -> Result<u16>;

    /// Write a register in MMD `device` behind `port`
    fn write_mmd(&mut self, port: u8, device: u8, reg_addr: u16, value: u16) -> Result<()>;
}

// =============================================================================
// PHY Helper Functions
// =============================================================================

/// Read the 32-bit PHY identifier (PHYIDR1:PHYIDR2)
pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
    let id1 = mdio.read(phy_addr, c22::PHYIDR1)? as u32;
    let id2 = mdio.read(phy_addr, c22::PHYIDR2)? as u32;
    Ok((id1 << 16) | id2)
}

/// Read the 32-bit identifier of one MMD (DEVID1:DEVID2)
pub fn read_mmd_id<M: MmdBus>(mdio: &mut M, port: u8, device: u8) -> Result<u32> {
    let id1 = mdio.read_mmd(port, device, mmd_reg::DEVID1)? as u32;
    let id2 = mdio.read_mmd(port, device, mmd_reg::DEVID2)? as u32;
    Ok((id1 << 16) | id2)
}

/// Read-modify-write a Clause 22 register
///
/// Bits in `clear` are cleared before bits in `set` are set.
pub fn modify<M: MdioBus>(mdio: &mut M, phy_addr: u8, reg_addr: u8, clear: u16, set: u16) -> Result<()> {
    let value = mdio.read(phy_addr, reg_addr)?;
    mdio.write(phy_addr, reg_addr, (value & !clear) | set)
}

/// Read-modify-write a Clause 45 register
pub fn modify_mmd<M: MmdBus>(
    mdio: &mut M,
    port: u8,
    device: u8,
    reg_addr: u16,
    clear: u16,
    set: u16,
) -> Result<()> {
    let value = mdio.read_mmd(port, device, reg_addr)?;
    mdio.write_mmd(port, device, reg_addr, (value & !clear) | set)
}
