//! PHY register packet codec
//!
//! A packet is a [`ControlWord`] followed immediately by a [`RegisterBody`],
//! [`PHY_REG_PKT_SIZE`] bytes in total with no length prefix or terminator.
//!
//! ```text
//! Offset 0 : ControlWord   (u16 LE)
//! Offset 2 : RegisterBody  (6 bytes, layout chosen by ControlWord bit 2)
//! ```

use super::body::RegisterBody;
use super::clause22::Clause22Message;
use super::clause45::Clause45Message;
use super::control::ControlWord;
use crate::constants::{CONTROL_WORD_SIZE, PHY_REG_PKT_SIZE, PHY_REG_PKT_VERSION, REGISTER_BODY_SIZE};
use crate::error::{PacketError, PacketResult};

// =============================================================================
// Free-standing codec
// =============================================================================

/// Encode a control word and body into wire bytes
///
/// Fails with [`PacketError::InconsistentTag`] if the control word's Clause 45
/// bit does not select the supplied body variant.
pub fn encode(control: ControlWord, body: RegisterBody) -> PacketResult<[u8; PHY_REG_PKT_SIZE]> {
    PhyRegPkt::new(control, body).map(|pkt| pkt.encode())
}

/// Decode wire bytes into a control word and body
///
/// Fails with [`PacketError::MalformedPacket`] unless `bytes` is exactly
/// [`PHY_REG_PKT_SIZE`] long. Every bit pattern of the right length decodes.
pub fn decode(bytes: &[u8]) -> PacketResult<(ControlWord, RegisterBody)> {
    PhyRegPkt::decode(bytes).map(PhyRegPkt::into_parts)
}

// =============================================================================
// Packet
// =============================================================================

/// A PHY register read/write command or its completed response
///
/// The control word's Clause 45 bit always agrees with the body variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyRegPkt {
    control: ControlWord,
    body: RegisterBody,
}

impl PhyRegPkt {
    /// Pair a control word with a body, checking the tag bit
    pub const fn new(control: ControlWord, body: RegisterBody) -> PacketResult<Self> {
        if control.clause45_enable() != body.is_clause45() {
            return Err(PacketError::InconsistentTag);
        }
        Ok(Self { control, body })
    }

    /// Build a packet from a body, deriving the tag bit from the variant
    ///
    /// All other control bits are taken from `control`.
    pub const fn tagged(control: ControlWord, body: RegisterBody) -> Self {
        Self {
            control: control.with_clause45_enable(body.is_clause45()),
            body,
        }
    }

    /// Enabled Clause 22 read of `reg_addr` on `phy_addr`
    pub const fn read_clause22(bus_index: u8, phy_addr: u8, reg_addr: u16) -> Self {
        Self::command(
            bus_index,
            false,
            RegisterBody::Clause22(Clause22Message::new(phy_addr, reg_addr, 0)),
        )
    }

    /// Enabled Clause 22 write of `value` to `reg_addr` on `phy_addr`
    pub const fn write_clause22(bus_index: u8, phy_addr: u8, reg_addr: u16, value: u16) -> Self {
        Self::command(
            bus_index,
            true,
            RegisterBody::Clause22(Clause22Message::new(phy_addr, reg_addr, value)),
        )
    }

    /// Enabled Clause 45 read of `reg_addr` in MMD `device` behind `port`
    pub const fn read_clause45(bus_index: u8, port: u8, device: u8, reg_addr: u16) -> Self {
        Self::command(
            bus_index,
            false,
            RegisterBody::Clause45(Clause45Message::new(port, device, reg_addr, 0)),
        )
    }

    /// Enabled Clause 45 write of `value` to `reg_addr` in MMD `device` behind `port`
    pub const fn write_clause45(
        bus_index: u8,
        port: u8,
        device: u8,
        reg_addr: u16,
        value: u16,
    ) -> Self {
        Self::command(
            bus_index,
            true,
            RegisterBody::Clause45(Clause45Message::new(port, device, reg_addr, value)),
        )
    }

    const fn command(bus_index: u8, write: bool, body: RegisterBody) -> Self {
        let control = ControlWord::new()
            .with_enabled(true)
            .with_write_enable(write)
            .with_bus_index(bus_index)
            .with_version(PHY_REG_PKT_VERSION);
        Self::tagged(control, body)
    }

    /// The control word
    pub const fn control(&self) -> ControlWord {
        self.control
    }

    /// The register body
    pub const fn body(&self) -> RegisterBody {
        self.body
    }

    /// Split into control word and body
    pub const fn into_parts(self) -> (ControlWord, RegisterBody) {
        (self.control, self.body)
    }

    /// Transaction status reported by the hardware
    pub const fn status(&self) -> u8 {
        self.control.status()
    }

    /// Register value in the active record
    pub const fn reg_val(&self) -> u16 {
        self.body.reg_val()
    }

    /// Copy with a new status, leaving every other bit unchanged
    #[must_use]
    pub const fn with_status(self, status: u8) -> Self {
        Self {
            control: self.control.with_status(status),
            body: self.body,
        }
    }

    /// Copy with a new register value in the active record
    #[must_use]
    pub const fn with_reg_val(self, reg_val: u16) -> Self {
        Self {
            control: self.control,
            body: self.body.with_reg_val(reg_val),
        }
    }

    /// Encode into a fixed-size array
    pub fn encode(&self) -> [u8; PHY_REG_PKT_SIZE] {
        let mut out = [0u8; PHY_REG_PKT_SIZE];
        out[..CONTROL_WORD_SIZE].copy_from_slice(&self.control.to_le_bytes());
        out[CONTROL_WORD_SIZE..].copy_from_slice(&self.body.to_bytes());
        out
    }

    /// Encode into the front of `buf`, returning the number of bytes written
    pub fn encode_into(&self, buf: &mut [u8]) -> PacketResult<usize> {
        let dst = buf
            .get_mut(..PHY_REG_PKT_SIZE)
            .ok_or(PacketError::BufferTooSmall)?;
        dst.copy_from_slice(&self.encode());
        Ok(PHY_REG_PKT_SIZE)
    }

    /// Decode exactly one packet
    pub fn decode(bytes: &[u8]) -> PacketResult<Self> {
        let bytes: &[u8; PHY_REG_PKT_SIZE] =
            bytes.try_into().map_err(|_| PacketError::MalformedPacket)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Decode a buffer already known to be one packet long
    pub fn from_bytes(bytes: &[u8; PHY_REG_PKT_SIZE]) -> Self {
        let control = ControlWord::from_le_bytes([bytes[0], bytes[1]]);

        let mut raw_body = [0u8; REGISTER_BODY_SIZE];
        raw_body.copy_from_slice(&bytes[CONTROL_WORD_SIZE..]);
        let body = RegisterBody::from_bytes(&raw_body, control.clause45_enable());

        Self { control, body }
    }
}

impl TryFrom<&[u8]> for PhyRegPkt {
    type Error = PacketError;

    fn try_from(bytes: &[u8]) -> PacketResult<Self> {
        Self::decode(bytes)
    }
}

impl From<PhyRegPkt> for [u8; PHY_REG_PKT_SIZE] {
    fn from(pkt: PhyRegPkt) -> Self {
        pkt.encode()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
